// ABOUTME: User biometric profile model consumed by target calculation
// ABOUTME: Sex, ActivityLevel, PrimaryGoal, HealthCondition, and UserBiometricProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sex used to select the BMR formula constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Mean of the male and female constants
    Other,
}

/// Habitual activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or twice-daily training
    VeryActive,
}

/// Primary body-weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Health condition that can change macronutrient ratios
///
/// An empty condition set means the user reported none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    /// Caps carbohydrate share of calories
    Diabetes,
    /// Recorded; no numeric effect on targets
    Hypertension,
    /// Recorded; no numeric effect on targets
    HeartDisease,
    /// Recorded; no numeric effect on targets
    KidneyDisease,
    /// Any other reported condition
    Other,
}

/// Biometric and goal inputs for target calculation
///
/// Mirrors the profile record held by the application store, where any field
/// may still be unset while onboarding. Target calculation rejects the profile
/// with `IncompleteProfile` if a required field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserBiometricProfile {
    /// Current body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Sex for the BMR constant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Habitual activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Primary goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<PrimaryGoal>,
    /// Intended weekly weight change in kilograms (0 when maintaining)
    #[serde(default)]
    pub weekly_goal_kg: f64,
    /// Reported health conditions
    #[serde(default)]
    pub health_conditions: BTreeSet<HealthCondition>,
}

impl UserBiometricProfile {
    /// Whether the user reported the given condition
    #[must_use]
    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.health_conditions.contains(&condition)
    }
}
