// ABOUTME: Core data models for the nutrition target and progress analytics engine
// ABOUTME: Re-exports profile, daily log, weight, target, and statistics structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types exchanged between the engine and the surrounding application.
//! Inputs (profile, daily logs, weight entries) are owned by the caller and
//! read as snapshots; outputs (targets, statistics, weight change) are derived
//! and never mutated in place.
//!
//! ## Design Principles
//!
//! - **Store Friendly**: Profile fields the store may not have yet are optional
//! - **Serializable**: All models round-trip through serde for persistence by the caller
//! - **Calendar Dates**: Logs are keyed by `NaiveDate`; the engine never reads a clock

// Domain modules
mod nutrition;
mod profile;
mod progress;
mod targets;
mod weight;

// Profile domain
pub use profile::{ActivityLevel, HealthCondition, PrimaryGoal, Sex, UserBiometricProfile};

// Daily logging domain
pub use nutrition::{DailyLogEntry, NutritionTotals};

// Target domain
pub use targets::{MacroPercentages, MacroTargets, NutritionTargets};

// Progress domain
pub use progress::{DayRecord, ProgressStatistics, TargetAdherence};

// Weight domain
pub use weight::{WeightChange, WeightEntry, WeightTrendDirection};
