// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet test logging, profile builders, and log and weight history helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutrition_engine`

use chrono::{Days, NaiveDate};
use nutrition_engine::models::{
    ActivityLevel, DailyLogEntry, NutritionTotals, PrimaryGoal, Sex, UserBiometricProfile,
    WeightEntry,
};
use std::collections::BTreeMap;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `date` shifted back by `days`
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap()
}

/// Reference "today" used across the suites
pub fn reference_today() -> NaiveDate {
    ymd(2025, 6, 15)
}

/// Complete profile: 70 kg, 175 cm male, exactly 30 years old on `reference_today()`
pub fn reference_profile() -> UserBiometricProfile {
    UserBiometricProfile {
        current_weight_kg: Some(70.0),
        height_cm: Some(175.0),
        date_of_birth: Some(ymd(1995, 6, 15)),
        sex: Some(Sex::Male),
        activity_level: Some(ActivityLevel::Moderate),
        primary_goal: Some(PrimaryGoal::Lose),
        weekly_goal_kg: 0.5,
        ..UserBiometricProfile::default()
    }
}

/// Logged day with the given calories and a fixed macro split
pub fn logged_entry(date: NaiveDate, calories: f64) -> DailyLogEntry {
    DailyLogEntry::with_meals(
        date,
        NutritionTotals {
            calories,
            protein_g: 120.0,
            carbs_g: 200.0,
            fat_g: 60.0,
        },
        8.0,
    )
}

/// Daily logs keyed by date from `(date, calories)` pairs
pub fn log_history(days: &[(NaiveDate, f64)]) -> BTreeMap<NaiveDate, DailyLogEntry> {
    days.iter()
        .map(|&(date, calories)| (date, logged_entry(date, calories)))
        .collect()
}

/// Weight history keyed by date from `(date, kg)` pairs
pub fn weight_history(entries: &[(NaiveDate, f64)]) -> BTreeMap<NaiveDate, WeightEntry> {
    entries
        .iter()
        .map(|&(date, kg)| (date, WeightEntry::new(date, kg)))
        .collect()
}
