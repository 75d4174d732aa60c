// ABOUTME: Date-range scan over daily food logs producing one normalized record per calendar day
// ABOUTME: Abstracts the log store behind a lookup trait keyed by calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutrition_core::models::{DailyLogEntry, DayRecord};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use tracing::debug;

/// Read access to daily log entries by date
pub trait DailyLogLookup {
    /// Entry recorded for `date`, if any
    fn entry_for(&self, date: NaiveDate) -> Option<&DailyLogEntry>;
}

impl DailyLogLookup for BTreeMap<NaiveDate, DailyLogEntry> {
    fn entry_for(&self, date: NaiveDate) -> Option<&DailyLogEntry> {
        self.get(&date)
    }
}

impl<S: BuildHasher> DailyLogLookup for HashMap<NaiveDate, DailyLogEntry, S> {
    fn entry_for(&self, date: NaiveDate) -> Option<&DailyLogEntry> {
        self.get(&date)
    }
}

/// Index entries by date; a later entry for the same date replaces an earlier one
#[must_use]
pub fn index_daily_logs<I>(entries: I) -> BTreeMap<NaiveDate, DailyLogEntry>
where
    I: IntoIterator<Item = DailyLogEntry>,
{
    entries
        .into_iter()
        .map(|entry| (entry.date, entry))
        .collect()
}

/// Produce one record per day in `[start, end]`, ascending
///
/// # Errors
///
/// Returns `InvalidDateRange` if `start` is after `end`
pub fn aggregate_daily_logs<L>(logs: &L, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>>
where
    L: DailyLogLookup + ?Sized,
{
    if start > end {
        return Err(AppError::invalid_date_range(format!(
            "Start date {start} is after end date {end}"
        )));
    }

    let records: Vec<DayRecord> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DayRecord::from_entry(date, logs.entry_for(date)))
        .collect();

    debug!(
        %start,
        %end,
        days = records.len(),
        logged = records.iter().filter(|r| r.logged).count(),
        "Aggregated daily logs"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::models::NutritionTotals;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap_or_default()
    }

    fn entry(day: u32, calories: f64) -> DailyLogEntry {
        DailyLogEntry::with_meals(
            date(day),
            NutritionTotals {
                calories,
                ..NutritionTotals::default()
            },
            4.0,
        )
    }

    #[test]
    fn test_window_is_inclusive_and_ascending() {
        let logs = index_daily_logs([entry(3, 1900.0)]);
        let records = aggregate_daily_logs(&logs, date(1), date(5)).unwrap_or_default();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3), date(4), date(5)]);
        assert!(records[2].logged);
        assert!(!records[3].logged);
    }

    #[test]
    fn test_window_crosses_month_end() {
        let logs: BTreeMap<NaiveDate, DailyLogEntry> = BTreeMap::new();
        let end = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap_or_default();

        let records = aggregate_daily_logs(&logs, date(27), end).unwrap_or_default();

        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_last_write_wins() {
        let logs = index_daily_logs([entry(2, 1500.0), entry(2, 2100.0)]);
        assert_eq!(logs.len(), 1);
        assert!(logs
            .get(&date(2))
            .is_some_and(|e| (e.total_nutrition.calories - 2100.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_hash_map_lookup() {
        let logs: HashMap<NaiveDate, DailyLogEntry> =
            [(date(1), entry(1, 1700.0))].into_iter().collect();
        let records = aggregate_daily_logs(&logs, date(1), date(1)).unwrap_or_default();
        assert_eq!(records.len(), 1);
        assert!(records[0].logged);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let logs: BTreeMap<NaiveDate, DailyLogEntry> = BTreeMap::new();
        assert!(aggregate_daily_logs(&logs, date(5), date(1)).is_err());
    }
}
