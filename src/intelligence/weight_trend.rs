// ABOUTME: Point-in-time body weight change between the latest entry and a windowed baseline
// ABOUTME: Weekly rate normalisation and losing/stable/gaining classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Trend Analyzer
//!
//! Compares the most recent weight on or before `today` with the most recent
//! weight on or before `today - window_days`. No interpolation is performed:
//! if either entry is missing the change is unknown.

use crate::config::intelligence::ProgressConfig;
use crate::config::intelligence_config::IntelligenceConfig;
use chrono::{Days, NaiveDate};
use nutrition_core::constants::energy::DAYS_PER_WEEK;
use nutrition_core::models::{WeightChange, WeightEntry, WeightTrendDirection};
use std::collections::BTreeMap;
use tracing::debug;

/// Index entries by date; a later entry for the same date replaces an earlier one
#[must_use]
pub fn index_weight_entries<I>(entries: I) -> BTreeMap<NaiveDate, WeightEntry>
where
    I: IntoIterator<Item = WeightEntry>,
{
    entries
        .into_iter()
        .map(|entry| (entry.date, entry))
        .collect()
}

/// Latest entry dated on or before `date`
#[must_use]
pub fn latest_on_or_before(
    weights: &BTreeMap<NaiveDate, WeightEntry>,
    date: NaiveDate,
) -> Option<&WeightEntry> {
    weights.range(..=date).next_back().map(|(_, entry)| entry)
}

/// Classify a change against the stability threshold
#[must_use]
pub fn classify_change(change_kg: f64, stable_threshold_kg: f64) -> WeightTrendDirection {
    if change_kg.abs() <= stable_threshold_kg {
        WeightTrendDirection::Stable
    } else if change_kg < 0.0 {
        WeightTrendDirection::Losing
    } else {
        WeightTrendDirection::Gaining
    }
}

/// Weight change over `window_days` ending at `today`, using the global configuration
#[must_use]
pub fn compute_weight_change(
    weights: &BTreeMap<NaiveDate, WeightEntry>,
    window_days: u32,
    today: NaiveDate,
) -> Option<WeightChange> {
    compute_weight_change_with_config(
        weights,
        window_days,
        today,
        &IntelligenceConfig::global().nutrition.progress,
    )
}

/// Weight change over `window_days` ending at `today`
///
/// Returns `None` when no entry exists on or before `today`, or none on or
/// before `today - window_days`, even if later entries exist.
#[must_use]
pub fn compute_weight_change_with_config(
    weights: &BTreeMap<NaiveDate, WeightEntry>,
    window_days: u32,
    today: NaiveDate,
    config: &ProgressConfig,
) -> Option<WeightChange> {
    let latest = latest_on_or_before(weights, today)?;
    let baseline_date = today.checked_sub_days(Days::new(u64::from(window_days)))?;
    let baseline = latest_on_or_before(weights, baseline_date)?;

    let change_kg = latest.weight_kg - baseline.weight_kg;
    let elapsed_days = (latest.date - baseline.date).num_days();
    let weekly_rate_kg = if elapsed_days > 0 {
        change_kg / elapsed_days as f64 * DAYS_PER_WEEK
    } else {
        0.0
    };
    let direction = classify_change(change_kg, config.weight_stable_threshold_kg);

    debug!(
        %today,
        window_days,
        change_kg,
        weekly_rate_kg,
        ?direction,
        "Computed weight change"
    );

    Some(WeightChange {
        change_kg,
        latest: latest.clone(),
        baseline: baseline.clone(),
        window_days,
        weekly_rate_kg,
        direction,
    })
}
