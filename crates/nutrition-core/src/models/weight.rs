// ABOUTME: Body weight history models for weight trend analysis
// ABOUTME: WeightEntry, WeightChange, and WeightTrendDirection definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One weigh-in; at most one per calendar date (last write wins)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Calendar date of the weigh-in
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    /// Create an entry without a note
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg,
            note: None,
        }
    }
}

/// Direction of a weight change relative to the stability threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrendDirection {
    /// Weight went down by more than the threshold
    Losing,
    /// Change within the threshold
    Stable,
    /// Weight went up by more than the threshold
    Gaining,
}

/// Weight change between the latest entry and the entry at the window start
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightChange {
    /// `latest - baseline` in kilograms (negative = loss)
    pub change_kg: f64,
    /// Latest entry on or before the reference date
    pub latest: WeightEntry,
    /// Latest entry on or before the window start
    pub baseline: WeightEntry,
    /// Requested window size in days
    pub window_days: u32,
    /// Change normalized to seven days over the elapsed days between entries
    ///
    /// Zero when both entries fall on the same date.
    pub weekly_rate_kg: f64,
    /// Direction of the change
    pub direction: WeightTrendDirection,
}
