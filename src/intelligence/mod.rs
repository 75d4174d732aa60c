// ABOUTME: Intelligence module for nutrition targets and progress analytics
// ABOUTME: Biometric formulas, goal adjustment, macro allocation, log statistics, and weight trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure computations behind the nutrition dashboard. Components, leaf-first:
//!
//! - [`nutrition_calculator`]: age, BMR and TDEE
//! - [`goal_adjuster`]: weekly goal to daily calories with a safety floor
//! - [`macro_allocator`]: daily calories to macronutrient grams
//! - [`target_calculator`]: orchestration and the `compute_targets` entry point
//! - [`log_aggregator`]: date-range scan into per-day records
//! - [`progress_statistics`]: averages, streak, consistency, best/worst days
//! - [`weight_trend`]: point-in-time weight change

/// Goal-based daily calorie adjustment
pub mod goal_adjuster;
/// Daily log aggregation over a date range
pub mod log_aggregator;
/// Macronutrient allocation
pub mod macro_allocator;
/// BMR, TDEE, and age calculations
pub mod nutrition_calculator;
/// Window statistics over daily logs
pub mod progress_statistics;
/// Nutrition target orchestration
pub mod target_calculator;
/// Weight change analysis
pub mod weight_trend;

pub use goal_adjuster::{calculate_daily_calories, daily_energy_delta, CalorieTarget};
pub use log_aggregator::{aggregate_daily_logs, index_daily_logs, DailyLogLookup};
pub use macro_allocator::{allocate_macros, MacroAllocation};
pub use nutrition_calculator::{calculate_age, calculate_mifflin_st_jeor, calculate_tdee};
pub use progress_statistics::{compute_progress_statistics, compute_target_adherence};
pub use target_calculator::{
    compute_targets, compute_targets_batch, compute_targets_with_config, ResolvedProfile,
};
pub use weight_trend::{
    compute_weight_change, compute_weight_change_with_config, index_weight_entries,
};
