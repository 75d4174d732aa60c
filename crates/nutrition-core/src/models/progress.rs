// ABOUTME: Progress aggregation models for dashboard trend statistics
// ABOUTME: DayRecord, ProgressStatistics, and TargetAdherence definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::DailyLogEntry;
use super::targets::NutritionTargets;
use crate::constants::percent::HUNDRED;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day inside an aggregation window
///
/// Days without a log, or with a log but no meals, carry `logged = false` and
/// zero nutrition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    /// Calendar date
    pub date: NaiveDate,
    /// Whether the day counts as logged
    pub logged: bool,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Water (glasses)
    pub water_glasses: f64,
}

impl DayRecord {
    /// Record for a date with nothing logged
    #[must_use]
    pub const fn not_logged(date: NaiveDate) -> Self {
        Self {
            date,
            logged: false,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            water_glasses: 0.0,
        }
    }

    /// Normalize an optional store entry for `date`
    #[must_use]
    pub fn from_entry(date: NaiveDate, entry: Option<&DailyLogEntry>) -> Self {
        match entry {
            Some(entry) if entry.is_logged() => Self {
                date,
                logged: true,
                calories: entry.total_nutrition.calories,
                protein_g: entry.total_nutrition.protein_g,
                carbs_g: entry.total_nutrition.carbs_g,
                fat_g: entry.total_nutrition.fat_g,
                water_glasses: entry.water_glasses,
            },
            _ => Self::not_logged(date),
        }
    }
}

/// Trend statistics over a date window
///
/// When no day in the window is logged, every average, the streak, and the
/// consistency are zero and `best_day`/`worst_day` are `None`. That zero-state
/// is a valid result, distinguishable through [`ProgressStatistics::has_data`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressStatistics {
    /// First date of the window (inclusive)
    pub start: NaiveDate,
    /// Last date of the window (inclusive)
    pub end: NaiveDate,
    /// Mean calories over logged days
    pub avg_calories: f64,
    /// Mean protein grams over logged days
    pub avg_protein_g: f64,
    /// Mean carbohydrate grams over logged days
    pub avg_carbs_g: f64,
    /// Mean fat grams over logged days
    pub avg_fat_g: f64,
    /// Mean water glasses over logged days
    pub avg_water_glasses: f64,
    /// Consecutive logged days ending at `end`
    pub streak_days: u32,
    /// Logged days as a rounded percentage of the window
    pub consistency_pct: u8,
    /// Logged day with the most calories (earliest on ties)
    pub best_day: Option<DayRecord>,
    /// Logged day with the fewest calories (earliest on ties)
    pub worst_day: Option<DayRecord>,
    /// Sum of calories over logged days
    pub total_calories: f64,
    /// Number of logged days
    pub days_logged: u32,
    /// Number of calendar days in the window
    pub total_days: u32,
}

impl ProgressStatistics {
    /// Summarize a window of per-day records
    ///
    /// `records` is expected in ascending date order ending at `end`, one per
    /// calendar day. Averages cover logged days only; the streak is the run of
    /// logged days ending at the last record; best and worst days resolve ties
    /// to the earliest date.
    #[must_use]
    pub fn from_day_records(start: NaiveDate, end: NaiveDate, records: &[DayRecord]) -> Self {
        let total_days = records.len() as u32;
        let logged: Vec<&DayRecord> = records.iter().filter(|r| r.logged).collect();
        let days_logged = logged.len() as u32;

        if days_logged == 0 {
            return Self::empty(start, end, total_days);
        }

        let count = f64::from(days_logged);
        let total_calories: f64 = logged.iter().map(|r| r.calories).sum();
        let avg = |field: fn(&DayRecord) -> f64| logged.iter().copied().map(field).sum::<f64>() / count;

        let streak_days = records.iter().rev().take_while(|r| r.logged).count() as u32;

        let mut best = logged[0];
        let mut worst = logged[0];
        for &record in &logged[1..] {
            if record.calories > best.calories {
                best = record;
            }
            if record.calories < worst.calories {
                worst = record;
            }
        }

        let consistency_pct = (count / f64::from(total_days) * HUNDRED)
            .round()
            .clamp(0.0, HUNDRED) as u8;

        Self {
            start,
            end,
            avg_calories: total_calories / count,
            avg_protein_g: avg(|r| r.protein_g),
            avg_carbs_g: avg(|r| r.carbs_g),
            avg_fat_g: avg(|r| r.fat_g),
            avg_water_glasses: avg(|r| r.water_glasses),
            streak_days,
            consistency_pct,
            best_day: Some(*best),
            worst_day: Some(*worst),
            total_calories,
            days_logged,
            total_days,
        }
    }

    /// Zero-state statistics for a window without logged days
    #[must_use]
    pub const fn empty(start: NaiveDate, end: NaiveDate, total_days: u32) -> Self {
        Self {
            start,
            end,
            avg_calories: 0.0,
            avg_protein_g: 0.0,
            avg_carbs_g: 0.0,
            avg_fat_g: 0.0,
            avg_water_glasses: 0.0,
            streak_days: 0,
            consistency_pct: 0,
            best_day: None,
            worst_day: None,
            total_calories: 0.0,
            days_logged: 0,
            total_days,
        }
    }

    /// Whether at least one day in the window was logged
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.days_logged > 0
    }
}

/// Average intake relative to the user's targets, as percentages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetAdherence {
    /// Average calories as a percentage of the calorie target
    pub calories_pct: f64,
    /// Average protein as a percentage of the protein target
    pub protein_pct: f64,
    /// Average carbohydrates as a percentage of the carbohydrate target
    pub carbs_pct: f64,
    /// Average fat as a percentage of the fat target
    pub fat_pct: f64,
}

impl TargetAdherence {
    /// Compare window averages against targets
    ///
    /// Returns `None` when the window has no logged days. A zero target yields
    /// zero adherence for that macronutrient.
    #[must_use]
    pub fn from_statistics(stats: &ProgressStatistics, targets: &NutritionTargets) -> Option<Self> {
        if !stats.has_data() {
            return None;
        }

        Some(Self {
            calories_pct: percent_of(stats.avg_calories, f64::from(targets.daily_calories)),
            protein_pct: percent_of(stats.avg_protein_g, f64::from(targets.macros.protein_g)),
            carbs_pct: percent_of(stats.avg_carbs_g, f64::from(targets.macros.carbs_g)),
            fat_pct: percent_of(stats.avg_fat_g, f64::from(targets.macros.fat_g)),
        })
    }
}

fn percent_of(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        actual / target * HUNDRED
    } else {
        0.0
    }
}
