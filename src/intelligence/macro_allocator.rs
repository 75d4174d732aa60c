// ABOUTME: Macronutrient allocation splitting a calorie target into protein, carbs, and fat grams
// ABOUTME: Goal-based protein per kilogram, fixed fat share, diabetes carbohydrate cap, rounding drift repair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macronutrient Allocator
//!
//! Allocation order:
//!
//! 1. Protein from body weight: `lose 2.0`, `maintain 1.6`, `gain 1.8` g/kg
//! 2. Fat at 30% of total calories
//! 3. Carbohydrates take the remainder
//! 4. With diabetes, carbohydrates are capped at 40% of total calories and fat
//!    absorbs what the cap removes
//! 5. Grams are rounded; if the rounded energy drifts more than 1% from the
//!    target, carbohydrates absorb the difference
//!
//! Protein and fat are clamped to the calorie budget so the energy invariant
//! holds even when a heavy user's protein need exceeds a floor-level target.

use crate::config::intelligence::MacronutrientConfig;
use crate::errors::{AppError, AppResult};
use nutrition_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrition_core::constants::percent::HUNDRED;
use nutrition_core::models::{HealthCondition, MacroPercentages, MacroTargets, PrimaryGoal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Result of splitting a calorie target into macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroAllocation {
    /// Rounded gram targets
    pub macros: MacroTargets,
    /// Share of the calorie target per macronutrient
    pub percentages: MacroPercentages,
    /// Whether the diabetes carbohydrate cap reduced carbohydrates
    pub carb_cap_applied: bool,
}

/// Protein grams per kilogram of body weight for a goal
#[must_use]
pub const fn protein_g_per_kg(goal: PrimaryGoal, config: &MacronutrientConfig) -> f64 {
    match goal {
        PrimaryGoal::Lose => config.protein_lose_g_per_kg,
        PrimaryGoal::Maintain => config.protein_maintain_g_per_kg,
        PrimaryGoal::Gain => config.protein_gain_g_per_kg,
    }
}

/// Split a daily calorie target into macronutrient grams
///
/// # Errors
///
/// Returns `InvalidBiometricInput` if `daily_calories` is zero or `weight_kg`
/// is not a positive finite number
pub fn allocate_macros(
    daily_calories: u32,
    goal: PrimaryGoal,
    health_conditions: &BTreeSet<HealthCondition>,
    weight_kg: f64,
    config: &MacronutrientConfig,
) -> AppResult<MacroAllocation> {
    if daily_calories == 0 {
        return Err(AppError::invalid_biometric(
            "Daily calorie target must be positive",
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(
            AppError::invalid_biometric(format!("Weight must be positive, got {weight_kg} kg"))
                .with_field("current_weight_kg"),
        );
    }

    let budget = f64::from(daily_calories);

    let protein_need_kcal = weight_kg * protein_g_per_kg(goal, config) * KCAL_PER_GRAM_PROTEIN;
    let protein_kcal = if protein_need_kcal > budget {
        warn!(
            protein_need_kcal,
            budget, "Protein need exceeds calorie target, capping protein at target"
        );
        budget
    } else {
        protein_need_kcal
    };

    let fat_target_kcal = budget * config.fat_percent_of_calories / HUNDRED;
    let mut fat_kcal = fat_target_kcal.min(budget - protein_kcal).max(0.0);
    let mut carbs_kcal = (budget - protein_kcal - fat_kcal).max(0.0);

    let mut carb_cap_applied = false;
    if health_conditions.contains(&HealthCondition::Diabetes) {
        let carb_cap_kcal = budget * config.diabetes_carb_cap_percent / HUNDRED;
        if carbs_kcal > carb_cap_kcal {
            carbs_kcal = carb_cap_kcal;
            fat_kcal = budget - protein_kcal - carbs_kcal;
            carb_cap_applied = true;
        }
    }

    let mut macros = MacroTargets {
        protein_g: grams(protein_kcal, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(carbs_kcal, KCAL_PER_GRAM_CARBS),
        fat_g: grams(fat_kcal, KCAL_PER_GRAM_FAT),
    };

    let drift_kcal = budget - macros.total_kcal();
    let tolerance_kcal = budget * config.rounding_tolerance_percent / HUNDRED;
    if drift_kcal.abs() > tolerance_kcal {
        let carbs_kcal = f64::from(macros.carbs_g).mul_add(KCAL_PER_GRAM_CARBS, drift_kcal);
        debug!(
            drift_kcal,
            tolerance_kcal, "Rounding drift exceeds tolerance, adjusting carbohydrates"
        );
        macros.carbs_g = grams(carbs_kcal, KCAL_PER_GRAM_CARBS);
    }

    let percentages = MacroPercentages {
        protein_percent: share(f64::from(macros.protein_g) * KCAL_PER_GRAM_PROTEIN, budget),
        carbs_percent: share(f64::from(macros.carbs_g) * KCAL_PER_GRAM_CARBS, budget),
        fat_percent: share(f64::from(macros.fat_g) * KCAL_PER_GRAM_FAT, budget),
    };

    debug!(
        daily_calories,
        protein_g = macros.protein_g,
        carbs_g = macros.carbs_g,
        fat_g = macros.fat_g,
        carb_cap_applied,
        "Allocated macronutrients"
    );

    Ok(MacroAllocation {
        macros,
        percentages,
        carb_cap_applied,
    })
}

/// Round energy to whole grams, never negative
fn grams(kcal: f64, kcal_per_gram: f64) -> u32 {
    (kcal / kcal_per_gram).round().max(0.0) as u32
}

fn share(kcal: f64, budget: f64) -> f64 {
    kcal / budget * HUNDRED
}
