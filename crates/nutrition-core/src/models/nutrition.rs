// ABOUTME: Daily food log models read by progress aggregation
// ABOUTME: NutritionTotals and DailyLogEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summed nutrition for one day of logging
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Total calories consumed (kcal)
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
}

/// One calendar day of food and water logging
///
/// Owned by the application's log store; the engine only reads it. The date is
/// the unique key within a history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLogEntry {
    /// Calendar date of the log
    pub date: NaiveDate,
    /// Summed nutrition across all meals
    pub total_nutrition: NutritionTotals,
    /// Water intake in glasses
    #[serde(default)]
    pub water_glasses: f64,
    /// Whether at least one meal was logged on this date
    pub meals_present: bool,
}

impl DailyLogEntry {
    /// Create an entry for a day with at least one logged meal
    #[must_use]
    pub const fn with_meals(date: NaiveDate, total_nutrition: NutritionTotals, water_glasses: f64) -> Self {
        Self {
            date,
            total_nutrition,
            water_glasses,
            meals_present: true,
        }
    }

    /// Whether this entry counts as a logged day
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        self.meals_present
    }
}
