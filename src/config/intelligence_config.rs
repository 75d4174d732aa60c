// ABOUTME: Global intelligence configuration for nutrition targets and progress analytics
// ABOUTME: Loads defaults, applies environment overrides, validates, and caches a process-wide instance
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//! Intelligence Configuration Module
//!
//! Provides the process-wide configuration read by the public entry points.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export NUTRITION_MIN_DAILY_CALORIES=1500
//!    export NUTRITION_FAT_PERCENT=25
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! # Examples
//!
//! ```rust
//! use nutrition_engine::config::intelligence_config::IntelligenceConfig;
//!
//! let config = IntelligenceConfig::default();
//! assert!((config.nutrition.goal_adjustment.min_daily_calories - 1200.0).abs() < f64::EPSILON);
//! ```

pub use crate::config::intelligence::ConfigError;
use crate::config::intelligence::NutritionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable overriding the kcal per kilogram of body mass
pub const ENV_KCAL_PER_KG: &str = "NUTRITION_KCAL_PER_KG";
/// Environment variable overriding the absolute calorie floor
pub const ENV_MIN_DAILY_CALORIES: &str = "NUTRITION_MIN_DAILY_CALORIES";
/// Environment variable overriding the TDEE fraction floor
pub const ENV_MIN_TDEE_FRACTION: &str = "NUTRITION_MIN_TDEE_FRACTION";
/// Environment variable overriding the default fat share
pub const ENV_FAT_PERCENT: &str = "NUTRITION_FAT_PERCENT";
/// Environment variable overriding the diabetes carbohydrate cap
pub const ENV_DIABETES_CARB_CAP_PERCENT: &str = "NUTRITION_DIABETES_CARB_CAP_PERCENT";
/// Environment variable overriding the stable-weight threshold
pub const ENV_WEIGHT_STABLE_THRESHOLD_KG: &str = "NUTRITION_WEIGHT_STABLE_THRESHOLD_KG";

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Nutrition target and progress configuration
    pub nutrition: NutritionConfig,
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let goal = &mut self.nutrition.goal_adjustment;
        if let Some(val) = parse_env(ENV_KCAL_PER_KG)? {
            goal.kcal_per_kg = val;
        }
        if let Some(val) = parse_env(ENV_MIN_DAILY_CALORIES)? {
            goal.min_daily_calories = val;
        }
        if let Some(val) = parse_env(ENV_MIN_TDEE_FRACTION)? {
            goal.min_tdee_fraction = val;
        }

        let macros = &mut self.nutrition.macronutrients;
        if let Some(val) = parse_env(ENV_FAT_PERCENT)? {
            macros.fat_percent_of_calories = val;
        }
        if let Some(val) = parse_env(ENV_DIABETES_CARB_CAP_PERCENT)? {
            macros.diabetes_carb_cap_percent = val;
        }

        if let Some(val) = parse_env(ENV_WEIGHT_STABLE_THRESHOLD_KG)? {
            self.nutrition.progress.weight_stable_threshold_kg = val;
        }

        Ok(self)
    }
}

/// Read and parse an optional environment variable
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
