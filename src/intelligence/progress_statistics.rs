// ABOUTME: Progress statistics over a window of daily food logs for dashboard trend views
// ABOUTME: Averages, logging streak, consistency, best and worst days, and adherence to targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log_aggregator::{aggregate_daily_logs, DailyLogLookup};
use crate::errors::AppResult;
use chrono::NaiveDate;
use nutrition_core::models::{NutritionTargets, ProgressStatistics, TargetAdherence};
use tracing::debug;

/// Compute statistics for the inclusive window `[start, end]`
///
/// A window without logged days yields zero-state statistics
/// (`has_data() == false`), never an error.
///
/// # Errors
///
/// Returns `InvalidDateRange` if `start` is after `end`
pub fn compute_progress_statistics<L>(
    logs: &L,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<ProgressStatistics>
where
    L: DailyLogLookup + ?Sized,
{
    let records = aggregate_daily_logs(logs, start, end)?;
    let stats = ProgressStatistics::from_day_records(start, end, &records);

    debug!(
        %start,
        %end,
        days_logged = stats.days_logged,
        streak_days = stats.streak_days,
        consistency_pct = stats.consistency_pct,
        avg_calories = stats.avg_calories,
        "Computed progress statistics"
    );

    Ok(stats)
}

/// Average intake over the window relative to targets
///
/// # Errors
///
/// Returns `InvalidDateRange` if `start` is after `end`. An empty window is
/// `Ok(None)`.
pub fn compute_target_adherence<L>(
    logs: &L,
    start: NaiveDate,
    end: NaiveDate,
    targets: &NutritionTargets,
) -> AppResult<Option<TargetAdherence>>
where
    L: DailyLogLookup + ?Sized,
{
    let stats = compute_progress_statistics(logs, start, end)?;
    Ok(TargetAdherence::from_statistics(&stats, targets))
}
