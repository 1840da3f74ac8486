// ABOUTME: Week-bucketed training streak and consistency scoring
// ABOUTME: Monday-start week keys rebuilt from raw sets on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use liftwise_core::constants::scheduling::DAYS_PER_WEEK;
use liftwise_core::WorkoutSet;

/// Streak and consistency snapshot derived from week buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive weeks with at least one session, counting back from the
    /// current (or, when the current week is still empty, the previous) week
    pub current_streak: u32,
    /// Longest run of strictly consecutive active weeks ever observed
    pub longest_streak: u32,
    /// Share of tracked weeks containing activity, 0-100
    pub consistency_score: f64,
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Rebuild the streak snapshot from raw sets
///
/// Only sets with resolved timestamps contribute. The state is derived fresh
/// on every call; nothing is cached between invocations.
#[must_use]
pub fn streak_state(sets: &[WorkoutSet], now: DateTime<Utc>) -> StreakState {
    let session_dates: BTreeSet<NaiveDate> = sets
        .iter()
        .filter_map(|s| s.timestamp)
        .map(|t| t.date_naive())
        .collect();

    if session_dates.is_empty() {
        return StreakState {
            current_streak: 0,
            longest_streak: 0,
            consistency_score: 0.0,
        };
    }

    let weeks: BTreeSet<NaiveDate> = session_dates.iter().map(|d| week_start(*d)).collect();

    // Current streak: walk backward week by week from this week, or from
    // last week when this week has no activity yet.
    let this_week = week_start(now.date_naive());
    let mut cursor = if weeks.contains(&this_week) {
        this_week
    } else {
        this_week - Duration::days(DAYS_PER_WEEK)
    };
    let mut current_streak = 0_u32;
    while weeks.contains(&cursor) {
        current_streak += 1;
        cursor = cursor - Duration::days(DAYS_PER_WEEK);
    }

    // Longest streak: longest run of adjacent weeks in the sorted bucket list.
    let mut longest_streak = 0_u32;
    let mut run = 0_u32;
    let mut previous: Option<NaiveDate> = None;
    for week in &weeks {
        run = match previous {
            Some(prev) if (*week - prev).num_days() == DAYS_PER_WEEK => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        previous = Some(*week);
    }

    let first_week = weeks
        .iter()
        .next()
        .copied()
        .unwrap_or(this_week);
    let total_weeks_tracked = ((this_week - first_week).num_days() / DAYS_PER_WEEK + 1).max(1);
    let consistency_score =
        (100.0 * weeks.len() as f64 / total_weeks_tracked as f64).min(100.0);

    StreakState {
        current_streak,
        longest_streak,
        consistency_score,
    }
}
