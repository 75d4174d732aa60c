// ABOUTME: Benchmark fixtures generating deterministic profiles, food logs, and weight histories
// ABOUTME: Keeps performance measurements reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for nutrition data.

use chrono::{Days, NaiveDate};
use nutrition_engine::models::{
    ActivityLevel, DailyLogEntry, NutritionTotals, PrimaryGoal, Sex, UserBiometricProfile,
    WeightEntry,
};
use std::collections::BTreeMap;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One week - dashboard default
    Week,
    /// One quarter
    Quarter,
    /// Two years of daily logging
    TwoYears,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Quarter => 90,
            Self::TwoYears => 730,
        }
    }
}

/// Fixed reference date so results do not depend on the wall clock
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
}

/// Window start for a history ending at `bench_today()`
#[must_use]
pub fn window_start(length: HistoryLength) -> NaiveDate {
    bench_today()
        .checked_sub_days(Days::new(length.days() - 1))
        .unwrap_or_default()
}

/// Deterministic profiles cycling through sex, activity, and goal
#[must_use]
pub fn generate_profiles(count: u32) -> Vec<UserBiometricProfile> {
    (0..count)
        .map(|index| {
            let sex = match index % 3 {
                0 => Sex::Male,
                1 => Sex::Female,
                _ => Sex::Other,
            };
            let activity_level = match index % 5 {
                0 => ActivityLevel::Sedentary,
                1 => ActivityLevel::Light,
                2 => ActivityLevel::Moderate,
                3 => ActivityLevel::Active,
                _ => ActivityLevel::VeryActive,
            };
            let primary_goal = match index % 3 {
                0 => PrimaryGoal::Lose,
                1 => PrimaryGoal::Maintain,
                _ => PrimaryGoal::Gain,
            };
            UserBiometricProfile {
                current_weight_kg: Some(50.0 + f64::from(index % 70)),
                height_cm: Some(150.0 + f64::from(index % 45)),
                date_of_birth: NaiveDate::from_ymd_opt(1960 + (index % 45) as i32, 1 + index % 12, 1),
                sex: Some(sex),
                activity_level: Some(activity_level),
                primary_goal: Some(primary_goal),
                weekly_goal_kg: 0.25 * f64::from(index % 4),
                ..UserBiometricProfile::default()
            }
        })
        .collect()
}

/// Daily logs ending at `bench_today()`, skipping every fifth day
#[must_use]
pub fn generate_log_history(length: HistoryLength) -> BTreeMap<NaiveDate, DailyLogEntry> {
    (0..length.days())
        .filter(|offset| offset % 5 != 4)
        .filter_map(|offset| bench_today().checked_sub_days(Days::new(offset)))
        .enumerate()
        .map(|(index, date)| {
            let calories = 1600.0 + ((index * 97) % 900) as f64;
            let totals = NutritionTotals {
                calories,
                protein_g: calories * 0.25 / 4.0,
                carbs_g: calories * 0.45 / 4.0,
                fat_g: calories * 0.30 / 9.0,
            };
            (date, DailyLogEntry::with_meals(date, totals, 6.0))
        })
        .collect()
}

/// Weigh-ins every other day ending at `bench_today()`
#[must_use]
pub fn generate_weight_history(length: HistoryLength) -> BTreeMap<NaiveDate, WeightEntry> {
    (0..length.days())
        .step_by(2)
        .filter_map(|offset| {
            let date = bench_today().checked_sub_days(Days::new(offset))?;
            Some((date, WeightEntry::new(date, 70.0 + offset as f64 * 0.02)))
        })
        .collect()
}
