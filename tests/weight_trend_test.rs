// ABOUTME: Integration tests for body weight change over trailing windows
// ABOUTME: Covers baseline selection, missing history, weekly rate, and trend classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use nutrition_engine::{
    compute_weight_change,
    config::intelligence::ProgressConfig,
    intelligence::{compute_weight_change_with_config, index_weight_entries},
    models::{WeightEntry, WeightTrendDirection},
};

mod common;

use common::{days_before, reference_today, weight_history};

fn today() -> NaiveDate {
    reference_today()
}

#[test]
fn test_weekly_change_losing() {
    common::init_test_logging();
    let weights = weight_history(&[
        (days_before(today(), 14), 80.0),
        (days_before(today(), 7), 79.2),
        (today(), 78.5),
    ]);

    let change = compute_weight_change(&weights, 7, today()).unwrap();

    assert!((change.change_kg + 0.7).abs() < 1e-9);
    assert!((change.weekly_rate_kg + 0.7).abs() < 1e-9);
    assert_eq!(change.direction, WeightTrendDirection::Losing);
    assert_eq!(change.baseline.date, days_before(today(), 7));
    assert_eq!(change.latest.date, today());
    assert_eq!(change.window_days, 7);
}

#[test]
fn test_baseline_is_latest_entry_before_window_start() {
    let weights = weight_history(&[
        (days_before(today(), 14), 80.0),
        (days_before(today(), 7), 79.2),
        (days_before(today(), 1), 78.5),
    ]);

    let change = compute_weight_change(&weights, 10, today()).unwrap();

    // Baseline falls back to the entry 14 days ago; latest is yesterday
    assert_eq!(change.baseline.date, days_before(today(), 14));
    assert!((change.change_kg + 1.5).abs() < 1e-9);
    // -1.5 kg over 13 elapsed days
    assert!((change.weekly_rate_kg - (-1.5 / 13.0 * 7.0)).abs() < 1e-9);
}

#[test]
fn test_none_without_baseline_even_with_recent_entries() {
    let weights = weight_history(&[
        (days_before(today(), 5), 81.0),
        (days_before(today(), 2), 80.6),
        (today(), 80.1),
    ]);

    assert!(compute_weight_change(&weights, 7, today()).is_none());
}

#[test]
fn test_none_for_empty_history() {
    let weights = weight_history(&[]);
    assert!(compute_weight_change(&weights, 30, today()).is_none());
}

#[test]
fn test_future_entries_are_ignored() {
    let future = today().checked_add_days(Days::new(3)).unwrap();
    let weights = weight_history(&[
        (days_before(today(), 30), 90.0),
        (days_before(today(), 1), 89.0),
        (future, 70.0),
    ]);

    let change = compute_weight_change(&weights, 30, today()).unwrap();

    assert_eq!(change.latest.date, days_before(today(), 1));
    assert!((change.change_kg + 1.0).abs() < 1e-9);
}

#[test]
fn test_small_change_is_stable() {
    let weights = weight_history(&[(days_before(today(), 7), 70.0), (today(), 70.1)]);

    let change = compute_weight_change(&weights, 7, today()).unwrap();

    assert_eq!(change.direction, WeightTrendDirection::Stable);
}

#[test]
fn test_gain_and_custom_threshold() {
    let weights = weight_history(&[(days_before(today(), 7), 70.0), (today(), 70.5)]);
    let strict = ProgressConfig {
        weight_stable_threshold_kg: 0.0,
    };
    let loose = ProgressConfig {
        weight_stable_threshold_kg: 1.0,
    };

    let gaining = compute_weight_change_with_config(&weights, 7, today(), &strict).unwrap();
    let stable = compute_weight_change_with_config(&weights, 7, today(), &loose).unwrap();

    assert_eq!(gaining.direction, WeightTrendDirection::Gaining);
    assert_eq!(stable.direction, WeightTrendDirection::Stable);
}

#[test]
fn test_index_keeps_last_entry_per_date() {
    let day = days_before(today(), 7);
    let weights = index_weight_entries([
        WeightEntry::new(day, 75.0),
        WeightEntry {
            note: Some("after breakfast".to_owned()),
            ..WeightEntry::new(day, 75.8)
        },
        WeightEntry::new(today(), 75.0),
    ]);

    let change = compute_weight_change(&weights, 7, today()).unwrap();

    assert!((change.baseline.weight_kg - 75.8).abs() < f64::EPSILON);
    assert_eq!(change.baseline.note.as_deref(), Some("after breakfast"));
}
