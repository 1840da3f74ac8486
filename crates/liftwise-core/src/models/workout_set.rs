// ABOUTME: WorkoutSet record type consumed by every analysis pass
// ABOUTME: Immutable input snapshot with builder and session key derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged resistance-training set
///
/// Produced by an external importer; the engine treats every record as an
/// immutable snapshot. A missing `timestamp` excludes the set from all
/// temporal computations (windows, streaks, personal records) while still
/// allowing session-scoped analysis through `session_key` and `position`.
///
/// # Examples
///
/// ```rust
/// use liftwise_core::WorkoutSetBuilder;
/// use chrono::Utc;
///
/// let set = WorkoutSetBuilder::new("Bench Press", 100.0, 8)
///     .set_type("normal")
///     .position(1)
///     .rpe(8.5)
///     .session_key("2025-08-01T18:00|Push Day")
///     .timestamp(Utc::now())
///     .build();
///
/// assert_eq!(set.reps, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Exercise identifier as logged (e.g. "Bench Press")
    pub exercise: String,
    /// Load in kilograms, non-negative; 0 for bodyweight movements
    pub weight_kg: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Raw set-type tag from the importer ("w", "warmup", "normal", ...)
    pub set_type: String,
    /// Ordinal position of the set within its session, 1-based
    pub position: u32,
    /// Subjective effort rating; only values in [6, 10] carry signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Groups sets into sessions; derived from session start time and title
    pub session_key: String,
    /// Resolved calendar timestamp; absent when the source row was unparsable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WorkoutSet {
    /// Raw tonnage of this set in kilograms
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        self.weight_kg * f64::from(self.reps)
    }
}

/// Builder for [`WorkoutSet`] records
#[derive(Debug, Clone)]
pub struct WorkoutSetBuilder {
    set: WorkoutSet,
}

impl WorkoutSetBuilder {
    /// Start a builder from the three fields every set carries
    #[must_use]
    pub fn new(exercise: impl Into<String>, weight_kg: f64, reps: u32) -> Self {
        Self {
            set: WorkoutSet {
                exercise: exercise.into(),
                weight_kg,
                reps,
                set_type: String::new(),
                position: 1,
                rpe: None,
                session_key: String::new(),
                timestamp: None,
            },
        }
    }

    /// Raw set-type tag as logged by the source
    #[must_use]
    pub fn set_type(mut self, tag: impl Into<String>) -> Self {
        self.set.set_type = tag.into();
        self
    }

    /// 1-based ordinal within the session
    #[must_use]
    pub const fn position(mut self, position: u32) -> Self {
        self.set.position = position;
        self
    }

    /// Subjective effort rating
    #[must_use]
    pub const fn rpe(mut self, rpe: f64) -> Self {
        self.set.rpe = Some(rpe);
        self
    }

    /// Session grouping key
    #[must_use]
    pub fn session_key(mut self, key: impl Into<String>) -> Self {
        self.set.session_key = key.into();
        self
    }

    /// Resolved calendar timestamp
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.set.timestamp = Some(timestamp);
        self
    }

    /// Finalize the record
    #[must_use]
    pub fn build(self) -> WorkoutSet {
        self.set
    }
}

/// Derive the canonical session key from a session's start time and title
///
/// The same (start, title) pair always yields the same key, so importers can
/// derive it independently of the engine.
#[must_use]
pub fn session_key(start: DateTime<Utc>, title: &str) -> String {
    format!("{}|{}", start.format("%Y-%m-%dT%H:%M"), title.trim())
}
