// ABOUTME: Period-over-period rolling window analytics for training volume
// ABOUTME: Equal-length contiguous windows with an eligibility-gated delta set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis_config::RollingConfig;
use crate::personal_records::PrEvent;
use crate::set_classification::is_working_set;
use liftwise_core::WorkoutSet;

/// Aggregate statistics over an explicit inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
    /// Total tonnage over working sets with positive weight and reps
    pub total_volume_kg: f64,
    /// Working sets in the period, regardless of weight
    pub total_sets: usize,
    /// Unique sessions in the period
    pub total_sessions: usize,
    /// Personal-record events in the period
    pub pr_sets: usize,
    /// Working sets per session; 0 when there were no sessions
    pub avg_sets_per_workout: f64,
    /// Tonnage per session; 0 when there were no sessions
    pub avg_volume_per_workout: f64,
}

/// Comparison of a trailing window against its immediate predecessor
///
/// The two windows are always equal length, contiguous, and non-overlapping.
/// Deltas exist only when both windows meet the minimum session count; an
/// ineligible comparison carries no deltas at all, which keeps "no signal"
/// distinguishable from "zero change".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWindowComparison {
    /// Window length in days (7 or 28)
    pub window_days: u32,
    /// The trailing window ending today
    pub current: PeriodStats,
    /// The equal-length window immediately before it
    pub previous: PeriodStats,
    /// Both windows met the minimum session count
    pub eligible: bool,
    /// Volume change, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_change_pct: Option<f64>,
    /// Session count change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_change: Option<i64>,
    /// Working-set count change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_change: Option<i64>,
    /// PR count change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_change: Option<i64>,
}

fn period_stats(
    sets: &[WorkoutSet],
    pr_events: &[PrEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> PeriodStats {
    let in_range: Vec<&WorkoutSet> = sets
        .iter()
        .filter(|s| is_working_set(s))
        .filter(|s| {
            s.timestamp
                .is_some_and(|t| (start..=end).contains(&t.date_naive()))
        })
        .collect();

    let total_volume_kg: f64 = in_range
        .iter()
        .filter(|s| s.weight_kg > 0.0 && s.reps > 0)
        .map(|s| s.volume_kg())
        .sum();
    let total_sets = in_range.len();
    let sessions: BTreeSet<&str> = in_range.iter().map(|s| s.session_key.as_str()).collect();
    let total_sessions = sessions.len();
    let pr_sets = pr_events
        .iter()
        .filter(|e| (start..=end).contains(&e.date.date_naive()))
        .count();

    let (avg_sets_per_workout, avg_volume_per_workout) = if total_sessions == 0 {
        (0.0, 0.0)
    } else {
        (
            total_sets as f64 / total_sessions as f64,
            total_volume_kg / total_sessions as f64,
        )
    };

    PeriodStats {
        start,
        end,
        total_volume_kg,
        total_sets,
        total_sessions,
        pr_sets,
        avg_sets_per_workout,
        avg_volume_per_workout,
    }
}

fn volume_change(previous: f64, current: f64) -> f64 {
    if previous <= 0.0 {
        if current > 0.0 {
            return 100.0;
        }
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Compare the trailing `window_days`-day window against its predecessor
///
/// The current window is `[now - (window_days - 1), now]` in calendar days;
/// the previous window is the `window_days`-day block ending the day before
/// the current one starts.
#[must_use]
pub fn compare_rolling_windows(
    sets: &[WorkoutSet],
    pr_events: &[PrEvent],
    now: DateTime<Utc>,
    window_days: u32,
    config: &RollingConfig,
) -> RollingWindowComparison {
    let today = now.date_naive();
    let span = Duration::days(i64::from(window_days));

    let current_start = today - span + Duration::days(1);
    let previous_end = current_start - Duration::days(1);
    let previous_start = previous_end - span + Duration::days(1);

    let current = period_stats(sets, pr_events, current_start, today);
    let previous = period_stats(sets, pr_events, previous_start, previous_end);

    let eligible = current.total_sessions >= config.min_workouts_required
        && previous.total_sessions >= config.min_workouts_required;

    let (volume_change_pct, session_change, set_change, pr_change) = if eligible {
        (
            Some(volume_change(previous.total_volume_kg, current.total_volume_kg)),
            Some(current.total_sessions as i64 - previous.total_sessions as i64),
            Some(current.total_sets as i64 - previous.total_sets as i64),
            Some(current.pr_sets as i64 - previous.pr_sets as i64),
        )
    } else {
        (None, None, None, None)
    };

    RollingWindowComparison {
        window_days,
        current,
        previous,
        eligible,
        volume_change_pct,
        session_change,
        set_change,
        pr_change,
    }
}
