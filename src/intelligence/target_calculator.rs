// ABOUTME: Nutrition target orchestration from biometric profile to calorie and macro targets
// ABOUTME: Resolves required profile fields, then chains BMR, TDEE, goal adjustment, and macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Calculator
//!
//! Public entry point for daily targets. A profile is resolved first so that a
//! missing field is reported as `IncompleteProfile` before any arithmetic runs;
//! the pipeline is then
//! `age -> BMR -> TDEE -> daily calories -> macronutrients`.

use super::goal_adjuster::calculate_daily_calories;
use super::macro_allocator::allocate_macros;
use super::nutrition_calculator::{calculate_age, calculate_mifflin_st_jeor, calculate_tdee};
use crate::config::intelligence::NutritionConfig;
use crate::config::intelligence_config::IntelligenceConfig;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutrition_core::models::{
    ActivityLevel, HealthCondition, NutritionTargets, PrimaryGoal, Sex, UserBiometricProfile,
};
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Profile with every required field present
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile<'a> {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Primary goal
    pub primary_goal: PrimaryGoal,
    /// Weekly goal magnitude (kg)
    pub weekly_goal_kg: f64,
    /// Declared health conditions
    pub health_conditions: &'a BTreeSet<HealthCondition>,
}

impl<'a> ResolvedProfile<'a> {
    /// Check required fields in a fixed order and borrow the rest
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` naming the first absent field, checked in the
    /// order weight, height, date of birth, sex, activity level, primary goal
    pub fn resolve(profile: &'a UserBiometricProfile) -> AppResult<Self> {
        Ok(Self {
            weight_kg: required(profile.current_weight_kg, "current_weight_kg")?,
            height_cm: required(profile.height_cm, "height_cm")?,
            date_of_birth: required(profile.date_of_birth, "date_of_birth")?,
            sex: required(profile.sex, "sex")?,
            activity_level: required(profile.activity_level, "activity_level")?,
            primary_goal: required(profile.primary_goal, "primary_goal")?,
            weekly_goal_kg: profile.weekly_goal_kg,
            health_conditions: &profile.health_conditions,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::incomplete_profile(field))
}

/// Compute daily targets using the global configuration
///
/// # Errors
///
/// Returns `IncompleteProfile` if a required field is absent, or
/// `InvalidBiometricInput` if a field is out of range
pub fn compute_targets(
    profile: &UserBiometricProfile,
    today: NaiveDate,
) -> AppResult<NutritionTargets> {
    compute_targets_with_config(profile, today, &IntelligenceConfig::global().nutrition)
}

/// Compute daily targets with an explicit configuration
///
/// # Errors
///
/// Returns `IncompleteProfile` if a required field is absent, or
/// `InvalidBiometricInput` if a field is out of range
#[instrument(skip_all, fields(today = %today))]
pub fn compute_targets_with_config(
    profile: &UserBiometricProfile,
    today: NaiveDate,
    config: &NutritionConfig,
) -> AppResult<NutritionTargets> {
    let resolved = ResolvedProfile::resolve(profile)?;

    let age_years = calculate_age(resolved.date_of_birth, today)?;
    let bmr = calculate_mifflin_st_jeor(
        resolved.weight_kg,
        resolved.height_cm,
        age_years,
        resolved.sex,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, resolved.activity_level, &config.activity_factors)?;
    let calorie_target = calculate_daily_calories(
        tdee,
        resolved.primary_goal,
        resolved.weekly_goal_kg,
        &config.goal_adjustment,
    )?;
    let allocation = allocate_macros(
        calorie_target.daily_calories,
        resolved.primary_goal,
        resolved.health_conditions,
        resolved.weight_kg,
        &config.macronutrients,
    )?;

    debug!(
        bmr,
        tdee,
        daily_calories = calorie_target.daily_calories,
        floor_applied = calorie_target.floor_applied,
        carb_cap_applied = allocation.carb_cap_applied,
        "Computed nutrition targets"
    );

    Ok(NutritionTargets {
        bmr,
        tdee,
        daily_calories: calorie_target.daily_calories,
        macros: allocation.macros,
        macro_percentages: allocation.percentages,
        age_years,
        activity_level: resolved.activity_level,
        primary_goal: resolved.primary_goal,
        calorie_floor_applied: calorie_target.floor_applied,
    })
}

/// Compute targets for many independent profiles in parallel
///
/// Results keep the order of `profiles`; one failing profile does not affect
/// the others.
#[must_use]
pub fn compute_targets_batch(
    profiles: &[UserBiometricProfile],
    today: NaiveDate,
    config: &NutritionConfig,
) -> Vec<AppResult<NutritionTargets>> {
    profiles
        .par_iter()
        .map(|profile| compute_targets_with_config(profile, today, config))
        .collect()
}
