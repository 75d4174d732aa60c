// ABOUTME: Biometric calculations using peer-reviewed scientific formulas
// ABOUTME: Age from date of birth, Mifflin-St Jeor BMR, and activity-scaled TDEE
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Calculator Module
//!
//! Converts raw profile fields into Basal Metabolic Rate (BMR) and Total Daily
//! Energy Expenditure (TDEE). All functions are pure; "today" is supplied by
//! the caller.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutrition_core::models::{ActivityLevel, Sex};
use tracing::debug;

/// Calculate age in whole years on `today`
///
/// # Errors
///
/// Returns `InvalidBiometricInput` if `date_of_birth` is after `today`
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> AppResult<u32> {
    today.years_since(date_of_birth).ok_or_else(|| {
        AppError::invalid_biometric(format!(
            "Date of birth {date_of_birth} is after the reference date {today}"
        ))
        .with_field("date_of_birth")
    })
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
/// - Other: mean of the two (-78), an approximation rather than a validated regression
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidBiometricInput` if weight or height is not a positive finite
/// number, or age is outside the configured bounds (13-120 by default)
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(
            AppError::invalid_biometric(format!("Weight must be positive, got {weight_kg} kg"))
                .with_field("current_weight_kg"),
        );
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(
            AppError::invalid_biometric(format!("Height must be positive, got {height_cm} cm"))
                .with_field("height_cm"),
        );
    }
    if !(config.min_age_years..=config.max_age_years).contains(&age) {
        return Err(AppError::invalid_biometric(format!(
            "Age must be between {} and {} years, got {age}",
            config.min_age_years, config.max_age_years
        ))
        .with_field("date_of_birth"));
    }

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
        Sex::Other => config.other_constant(),
    };

    let bmr = config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + sex_constant;

    debug!(weight_kg, height_cm, age, ?sex, bmr, "Calculated Mifflin-St Jeor BMR");

    Ok(bmr)
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
///
/// # Errors
///
/// Returns `InvalidBiometricInput` if BMR is not a positive finite number
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_biometric(format!(
            "BMR must be positive, got {bmr}"
        )));
    }

    Ok(bmr * activity_factor(activity_level, config))
}
