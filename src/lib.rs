// ABOUTME: Main library entry point for the nutrition target and progress analytics engine
// ABOUTME: Derives daily calorie and macro targets and summarizes food and weight log history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # Nutrition Engine
//!
//! Pure computation boundary behind a personal nutrition dashboard. The engine
//! consumes a biometric profile and dated log snapshots, and produces target
//! and statistics records. It performs no I/O of its own.
//!
//! ## Entry Points
//!
//! - [`compute_targets`]: BMR, TDEE, daily calories, and macronutrient grams
//! - [`compute_progress_statistics`]: averages, streak, consistency, best/worst day
//! - [`compute_weight_change`]: weight delta over a trailing window
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nutrition_engine::models::{ActivityLevel, PrimaryGoal, Sex, UserBiometricProfile};
//! use nutrition_engine::compute_targets;
//!
//! let profile = UserBiometricProfile {
//!     current_weight_kg: Some(70.0),
//!     height_cm: Some(175.0),
//!     date_of_birth: NaiveDate::from_ymd_opt(1994, 3, 1),
//!     sex: Some(Sex::Male),
//!     activity_level: Some(ActivityLevel::Moderate),
//!     primary_goal: Some(PrimaryGoal::Lose),
//!     weekly_goal_kg: 0.5,
//!     ..UserBiometricProfile::default()
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();
//! let targets = compute_targets(&profile, today)?;
//! assert!(targets.daily_calories >= 1200);
//! # Ok::<(), nutrition_engine::errors::AppError>(())
//! ```

/// Configuration management for target and trend calculations
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// Nutrition target and progress analytics computations
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Domain constants shared with the core crate
pub use nutrition_core::constants;

/// Profile, log, target, and statistics models
pub use nutrition_core::models;

pub use intelligence::{compute_progress_statistics, compute_targets, compute_weight_change};
