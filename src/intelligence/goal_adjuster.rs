// ABOUTME: Goal-based calorie adjustment converting weekly weight goals into daily targets
// ABOUTME: Applies the 7700 kcal/kg energy equivalent and a physiological safety floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::GoalAdjustmentConfig;
use crate::errors::{AppError, AppResult};
use nutrition_core::constants::energy::DAYS_PER_WEEK;
use nutrition_core::models::PrimaryGoal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Daily calorie target derived from TDEE and the user's goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieTarget {
    /// Final daily calorie target (kcal)
    pub daily_calories: u32,
    /// Signed daily energy delta applied to TDEE (kcal)
    pub daily_delta_kcal: f64,
    /// Safety floor in effect: `max(min_daily_calories, tdee * min_tdee_fraction)`
    pub floor_kcal: f64,
    /// Whether the floor raised the goal-adjusted value
    pub floor_applied: bool,
}

/// Signed daily energy delta for a goal
///
/// The magnitude of `weekly_goal_kg` is spread over seven days; the sign comes
/// from the goal alone, and `Maintain` is always zero.
#[must_use]
pub fn daily_energy_delta(goal: PrimaryGoal, weekly_goal_kg: f64, kcal_per_kg: f64) -> f64 {
    let magnitude = weekly_goal_kg.abs() * kcal_per_kg / DAYS_PER_WEEK;
    match goal {
        PrimaryGoal::Lose => -magnitude,
        PrimaryGoal::Maintain => 0.0,
        PrimaryGoal::Gain => magnitude,
    }
}

/// Calculate the daily calorie target for a goal
///
/// `daily_calories = round(tdee + delta)`, raised to
/// `ceil(max(min_daily_calories, tdee * min_tdee_fraction))` when lower.
///
/// # Errors
///
/// Returns `InvalidBiometricInput` if `tdee` is not a positive finite number or
/// `weekly_goal_kg` is not finite
pub fn calculate_daily_calories(
    tdee: f64,
    goal: PrimaryGoal,
    weekly_goal_kg: f64,
    config: &GoalAdjustmentConfig,
) -> AppResult<CalorieTarget> {
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(AppError::invalid_biometric(format!(
            "TDEE must be positive, got {tdee}"
        )));
    }
    if !weekly_goal_kg.is_finite() {
        return Err(
            AppError::invalid_biometric("Weekly goal must be a finite number")
                .with_field("weekly_goal_kg"),
        );
    }

    let daily_delta_kcal = daily_energy_delta(goal, weekly_goal_kg, config.kcal_per_kg);
    let adjusted = (tdee + daily_delta_kcal).round();
    let floor_kcal = config
        .min_daily_calories
        .max(tdee * config.min_tdee_fraction);
    let floor_applied = adjusted < floor_kcal;

    let daily = if floor_applied {
        warn!(
            tdee,
            adjusted_kcal = adjusted,
            floor_kcal,
            ?goal,
            "Goal-adjusted calories below safety floor, raising to floor"
        );
        floor_kcal.ceil()
    } else {
        adjusted
    };

    debug!(tdee, daily_delta_kcal, daily, ?goal, "Calculated daily calorie target");

    Ok(CalorieTarget {
        daily_calories: daily as u32,
        daily_delta_kcal,
        floor_kcal,
        floor_applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintain_ignores_weekly_goal() {
        assert!(daily_energy_delta(PrimaryGoal::Maintain, -0.75, 7700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sign_follows_goal_not_input() {
        assert!((daily_energy_delta(PrimaryGoal::Lose, 0.5, 7700.0) + 550.0).abs() < 1e-9);
        assert!((daily_energy_delta(PrimaryGoal::Lose, -0.5, 7700.0) + 550.0).abs() < 1e-9);
        assert!((daily_energy_delta(PrimaryGoal::Gain, -0.25, 7700.0) - 275.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_tdee() {
        let config = GoalAdjustmentConfig::default();
        assert!(calculate_daily_calories(0.0, PrimaryGoal::Maintain, 0.0, &config).is_err());
        assert!(calculate_daily_calories(f64::INFINITY, PrimaryGoal::Lose, 0.5, &config).is_err());
    }
}
