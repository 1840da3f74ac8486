// ABOUTME: Core types and constants for the Liftwise training insights engine
// ABOUTME: Foundation crate with workout set models, series grouping, and strength constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise Core
//!
//! Foundation crate providing the shared data model for the Liftwise training
//! progression and insights engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Core data models (`WorkoutSet`, session keys, series grouping)
//! - **constants**: Strength-training constants organized by domain

/// Strength-training constants and thresholds organized by domain
pub mod constants;

/// Core data models (`WorkoutSet`, session keys, series grouping)
pub mod models;

pub use models::{
    group_by_exercise, group_by_exercise_and_session, session_key, sort_chronological,
    WorkoutSet, WorkoutSetBuilder,
};
