// ABOUTME: Nutrition configuration for target calculation and progress analytics
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustment, macro ratios, and trend thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Analysis Configuration
//!
//! Provides the tunable constants behind target calculation and progress
//! analytics. Defaults reproduce the published formulas; overrides come from
//! the environment through `IntelligenceConfig`.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use crate::config::intelligence::error::ConfigError;
use nutrition_core::constants::biometrics::{MAX_AGE_YEARS, MIN_AGE_YEARS};
use nutrition_core::constants::energy::{KCAL_PER_KG_BODY_MASS, MIN_CALORIE_FLOOR_KCAL};
use serde::{Deserialize, Serialize};

/// Nutrition Analysis Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Weekly goal to daily calorie conversion and safety floor
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macronutrient distribution targets
    pub macronutrients: MacronutrientConfig,
    /// Progress and weight trend thresholds
    pub progress: ProgressConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;
        self.macronutrients.validate()?;
        self.progress.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Youngest accepted age in years
    pub min_age_years: u32,
    /// Oldest accepted age in years
    pub max_age_years: u32,
}

impl BmrConfig {
    /// Constant used for `Sex::Other`: mean of the male and female constants
    #[must_use]
    pub fn other_constant(&self) -> f64 {
        (self.msj_male_constant + self.msj_female_constant) / 2.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(&[
            ("msj_weight_coef", self.msj_weight_coef),
            ("msj_height_coef", self.msj_height_coef),
            ("msj_age_coef", self.msj_age_coef),
            ("msj_male_constant", self.msj_male_constant),
            ("msj_female_constant", self.msj_female_constant),
        ])?;
        if self.min_age_years >= self.max_age_years {
            return Err(ConfigError::InvalidRange(
                "bmr.min_age_years must be < bmr.max_age_years",
            ));
        }
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "Mifflin-St Jeor weight/height coefficients must be positive, got {} and {}",
                self.msj_weight_coef, self.msj_height_coef
            )));
        }
        Ok(())
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ];
        ensure_finite(&[
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("active", self.active),
            ("very_active", self.very_active),
        ])?;
        if ordered[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sedentary activity factor must be >= 1.0, got {}",
                ordered[0]
            )));
        }
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must increase from sedentary to very_active",
            ));
        }
        Ok(())
    }
}

/// Weekly goal to daily calorie conversion
///
/// The floor `max(min_daily_calories, tdee * min_tdee_fraction)` keeps
/// aggressive goals from producing unsafe targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Energy equivalent of one kilogram of body mass (kcal)
    pub kcal_per_kg: f64,
    /// Absolute minimum daily calorie target (kcal)
    pub min_daily_calories: f64,
    /// Minimum daily target as a fraction of TDEE
    pub min_tdee_fraction: f64,
}

impl GoalAdjustmentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(&[
            ("kcal_per_kg", self.kcal_per_kg),
            ("min_daily_calories", self.min_daily_calories),
            ("min_tdee_fraction", self.min_tdee_fraction),
        ])?;
        if self.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "kcal_per_kg must be positive, got {}",
                self.kcal_per_kg
            )));
        }
        if self.min_daily_calories < MIN_CALORIE_FLOOR_KCAL {
            return Err(ConfigError::ValueOutOfRange(format!(
                "min_daily_calories must be at least {MIN_CALORIE_FLOOR_KCAL}, got {}",
                self.min_daily_calories
            )));
        }
        if !(0.0..=1.0).contains(&self.min_tdee_fraction) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "min_tdee_fraction must be between 0.0 and 1.0, got {}",
                self.min_tdee_fraction
            )));
        }
        Ok(())
    }
}

/// Macronutrient allocation configuration
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein for weight loss (g/kg): 2.0, preserves lean mass in a deficit
    pub protein_lose_g_per_kg: f64,
    /// Protein for maintenance (g/kg): 1.6
    pub protein_maintain_g_per_kg: f64,
    /// Protein for weight gain (g/kg): 1.8
    pub protein_gain_g_per_kg: f64,
    /// Fat share of total daily calories (percent): 30
    pub fat_percent_of_calories: f64,
    /// Carbohydrate cap for diabetes (percent of total calories): 40
    pub diabetes_carb_cap_percent: f64,
    /// Allowed rounding drift between macro energy and the calorie target (percent): 1
    pub rounding_tolerance_percent: f64,
}

impl MacronutrientConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(&[
            ("protein_lose_g_per_kg", self.protein_lose_g_per_kg),
            ("protein_maintain_g_per_kg", self.protein_maintain_g_per_kg),
            ("protein_gain_g_per_kg", self.protein_gain_g_per_kg),
            ("fat_percent_of_calories", self.fat_percent_of_calories),
            ("diabetes_carb_cap_percent", self.diabetes_carb_cap_percent),
            ("rounding_tolerance_percent", self.rounding_tolerance_percent),
        ])?;
        let percentages = [
            ("fat_percent_of_calories", self.fat_percent_of_calories),
            ("diabetes_carb_cap_percent", self.diabetes_carb_cap_percent),
            ("rounding_tolerance_percent", self.rounding_tolerance_percent),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }

        let protein = [
            ("protein_lose_g_per_kg", self.protein_lose_g_per_kg),
            ("protein_maintain_g_per_kg", self.protein_maintain_g_per_kg),
            ("protein_gain_g_per_kg", self.protein_gain_g_per_kg),
        ];
        for (name, value) in protein {
            if value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Progress analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Weight changes within +/- this many kilograms count as stable
    pub weight_stable_threshold_kg: f64,
}

impl ProgressConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(&[(
            "weight_stable_threshold_kg",
            self.weight_stable_threshold_kg,
        )])?;
        if self.weight_stable_threshold_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "weight_stable_threshold_kg must not be negative, got {}",
                self.weight_stable_threshold_kg
            )));
        }
        Ok(())
    }
}

/// Reject NaN and infinite values
fn ensure_finite(values: &[(&str, f64)]) -> Result<(), ConfigError> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(ConfigError::ValueOutOfRange(format!(
            "{name} must be a finite number, got {value}"
        ))),
        None => Ok(()),
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            min_age_years: MIN_AGE_YEARS,
            max_age_years: MAX_AGE_YEARS,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: KCAL_PER_KG_BODY_MASS,
            min_daily_calories: 1200.0,
            min_tdee_fraction: 0.75,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_lose_g_per_kg: 2.0,
            protein_maintain_g_per_kg: 1.6,
            protein_gain_g_per_kg: 1.8,
            fat_percent_of_calories: 30.0,
            diabetes_carb_cap_percent: 40.0,
            rounding_tolerance_percent: 1.0,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            weight_stable_threshold_kg: 0.2,
        }
    }
}
