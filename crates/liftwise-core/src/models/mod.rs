// ABOUTME: Data model module for workout sets and derived exercise series
// ABOUTME: Re-exports set records, builders, and grouping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Core data models for the insights engine

mod series;
mod workout_set;

pub use series::{group_by_exercise, group_by_exercise_and_session, sort_chronological};
pub use workout_set::{session_key, WorkoutSet, WorkoutSetBuilder};
