// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversion factors, biometric guard rails, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable policy values (calorie floor,
//! protein factors, carb caps) live in the engine configuration instead; the
//! values here are physical conversions and hard guard rails.

/// Energy content of the calorie-bearing macronutrients
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate energy equivalent of one kilogram of body mass
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days per week, used to spread a weekly goal over single days
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Lowest accepted absolute calorie floor (kcal)
    ///
    /// Below this, whole-gram rounding alone can exceed the 1% macro energy
    /// tolerance.
    pub const MIN_CALORIE_FLOOR_KCAL: f64 = 800.0;
}

/// Guard rails for biometric input validation
///
/// These reject implausible records; they are not medical limits.
pub mod biometrics {
    /// Youngest age accepted for target calculation (years)
    pub const MIN_AGE_YEARS: u32 = 13;
    /// Oldest age accepted for target calculation (years)
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Percentage helpers
pub mod percent {
    /// Multiplier converting a ratio into a percentage
    pub const HUNDRED: f64 = 100.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Engine service name
    pub const NUTRITION_ENGINE: &str = "nutrition-engine";
}
