// ABOUTME: Intelligence module configuration for nutrition targets and progress analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, goal adjustment, macro ratios, progress thresholds
//! - `error` - Configuration validation errors

// Domain configuration modules
pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
    ProgressConfig,
};
