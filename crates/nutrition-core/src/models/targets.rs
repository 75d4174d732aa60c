// ABOUTME: Nutrition target output models produced by target calculation
// ABOUTME: MacroTargets, MacroPercentages, and NutritionTargets definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::{ActivityLevel, PrimaryGoal};
use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

impl MacroTargets {
    /// Energy represented by these grams (kcal)
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        f64::from(self.fat_g).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.protein_g)
                .mul_add(KCAL_PER_GRAM_PROTEIN, f64::from(self.carbs_g) * KCAL_PER_GRAM_CARBS),
        )
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Personalized daily calorie and macronutrient targets
///
/// Invariant: `macros.total_kcal()` is within 1% of `daily_calories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target after goal adjustment (kcal)
    pub daily_calories: u32,
    /// Macronutrient grams
    pub macros: MacroTargets,
    /// Macronutrient share of `daily_calories`
    pub macro_percentages: MacroPercentages,
    /// Age used for the BMR formula
    pub age_years: u32,
    /// Activity level used
    pub activity_level: ActivityLevel,
    /// Goal used
    pub primary_goal: PrimaryGoal,
    /// Whether the safety floor raised the goal-adjusted target
    pub calorie_floor_applied: bool,
}
