// ABOUTME: Chronological personal-record scan with per-exercise running bests
// ABOUTME: Produces PR events plus drought and frequency insight snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::RecordConfig;
use crate::set_classification::is_working_set;
use liftwise_core::{sort_chronological, WorkoutSet};

/// A single personal-record event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrEvent {
    /// Exercise the record belongs to
    pub exercise: String,
    /// When the record was set
    pub date: DateTime<Utc>,
    /// New best weight in kilograms
    pub weight_kg: f64,
    /// Running best immediately before this set (0 for a first record)
    pub previous_best_kg: f64,
    /// Session the record was set in
    pub session_key: String,
    /// Ordinal of the record set within its session
    pub position: u32,
}

/// Aggregate PR snapshot for the whole log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrInsights {
    /// Total PR events across all exercises
    pub total_prs: usize,
    /// Date of the most recent PR, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pr_date: Option<DateTime<Utc>>,
    /// Whole days since the most recent PR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_pr: Option<i64>,
    /// More than the drought threshold since the last PR
    pub in_drought: bool,
    /// PR events in the trailing month, expressed per week
    pub prs_per_week_last_month: f64,
}

/// Scan the full log chronologically and emit every personal-record event
///
/// The running best per exercise only ever increases; a set produces an
/// event exactly when its weight strictly exceeds the running best. Warmups
/// and sets with non-positive weight or reps neither qualify for a record
/// nor update the running best, and sets without a resolved timestamp are
/// excluded entirely. Input order is irrelevant; the scan sorts its own
/// borrowed copy.
#[must_use]
pub fn scan_personal_records(sets: &[WorkoutSet]) -> Vec<PrEvent> {
    let mut dated: Vec<&WorkoutSet> = sets
        .iter()
        .filter(|s| s.timestamp.is_some() && is_working_set(s))
        .filter(|s| s.weight_kg > 0.0 && s.reps > 0)
        .collect();
    sort_chronological(&mut dated);

    let (events, _) = dated.iter().fold(
        (Vec::new(), BTreeMap::<&str, f64>::new()),
        |(mut events, mut best), set| {
            let running_best = best.get(set.exercise.as_str()).copied().unwrap_or(0.0);
            if set.weight_kg > running_best {
                if let Some(date) = set.timestamp {
                    events.push(PrEvent {
                        exercise: set.exercise.clone(),
                        date,
                        weight_kg: set.weight_kg,
                        previous_best_kg: running_best,
                        session_key: set.session_key.clone(),
                        position: set.position,
                    });
                }
                best.insert(set.exercise.as_str(), set.weight_kg);
            }
            (events, best)
        },
    );

    debug!(total = events.len(), "personal record scan complete");
    events
}

/// Summarize PR events into a drought and frequency snapshot
#[must_use]
pub fn pr_insights(events: &[PrEvent], now: DateTime<Utc>, config: &RecordConfig) -> PrInsights {
    let last_pr_date = events.iter().map(|e| e.date).max();
    let days_since_last_pr = last_pr_date.map(|d| (now - d).num_days());
    let in_drought = days_since_last_pr.is_some_and(|days| days > config.drought_days);

    let window_start = now - chrono::Duration::days(config.frequency_window_days);
    let recent = events
        .iter()
        .filter(|e| e.date > window_start && e.date <= now)
        .count();
    let prs_per_week_last_month = recent as f64 / 4.0;

    PrInsights {
        total_prs: events.len(),
        last_pr_date,
        days_since_last_pr,
        in_drought,
        prs_per_week_last_month,
    }
}
