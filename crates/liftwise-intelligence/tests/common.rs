// ABOUTME: Shared test builders for insight analysis integration tests
// ABOUTME: Provides workout set constructors and timestamp parsing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::must_use_candidate
)]

//! Shared test utilities for `liftwise-intelligence`

use chrono::{DateTime, Utc};
use liftwise_core::{WorkoutSet, WorkoutSetBuilder};

/// Parse an RFC 3339 timestamp, panicking on malformed test data
pub fn ts(value: &str) -> DateTime<Utc> {
    value
        .parse::<DateTime<Utc>>()
        .unwrap_or_else(|e| panic!("bad test timestamp {value}: {e}"))
}

/// A dated working set in the given session
pub fn working_set(
    exercise: &str,
    weight_kg: f64,
    reps: u32,
    position: u32,
    session: &str,
    timestamp: &str,
) -> WorkoutSet {
    WorkoutSetBuilder::new(exercise, weight_kg, reps)
        .set_type("normal")
        .position(position)
        .session_key(session)
        .timestamp(ts(timestamp))
        .build()
}

/// A dated warmup set in the given session
pub fn warmup_set(
    exercise: &str,
    weight_kg: f64,
    reps: u32,
    position: u32,
    session: &str,
    timestamp: &str,
) -> WorkoutSet {
    WorkoutSetBuilder::new(exercise, weight_kg, reps)
        .set_type("w")
        .position(position)
        .session_key(session)
        .timestamp(ts(timestamp))
        .build()
}

/// A working set whose source row had no parsable timestamp
pub fn undated_set(
    exercise: &str,
    weight_kg: f64,
    reps: u32,
    position: u32,
    session: &str,
) -> WorkoutSet {
    WorkoutSetBuilder::new(exercise, weight_kg, reps)
        .set_type("normal")
        .position(position)
        .session_key(session)
        .build()
}
