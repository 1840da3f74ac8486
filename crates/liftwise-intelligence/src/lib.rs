// ABOUTME: Training progression and insights engine for resistance-training logs
// ABOUTME: Deterministic batch analyzers producing serializable coaching insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise Intelligence
//!
//! The computational core of Liftwise: a deterministic, side-effect-free
//! batch transform from an in-memory collection of [`liftwise_core::WorkoutSet`]
//! records to structured coaching insight. Every entry point is a pure
//! function of (raw sets, a reference "now", analysis configuration);
//! callers may memoize results however they like.
//!
//! ## Modules
//!
//! - **`analysis_config`**: threshold configuration with environment overrides
//! - **`set_classification`**: warmup vs working-set tagging
//! - **`one_rep_max`**: Epley 1RM projection with RPE adjustment
//! - **`expected_reps`**: rep-range projection at a target weight
//! - **`transitions`**: set-to-set performance classification within a session
//! - **`wisdom`**: session-level promote/demote verdicts per exercise
//! - **`personal_records`**: chronological PR scan and PR insight snapshot
//! - **`plateau`**: multi-session stagnation detection behind a trend seam
//! - **`rolling`**: period-over-period window comparisons
//! - **`streaks`**: week-bucketed consistency and streak scoring
//! - **`engine`**: facade running every pass into one serializable report

/// Threshold configuration with environment overrides
pub mod analysis_config;
/// Facade running every analysis pass into one serializable report
pub mod engine;
/// Rep-range projection at a target weight from prior working sets
pub mod expected_reps;
/// Epley one-rep-max projection with RPE adjustment
pub mod one_rep_max;
/// Chronological personal-record scan and PR insight snapshot
pub mod personal_records;
/// Multi-session stagnation detection behind a swappable trend seam
pub mod plateau;
/// Period-over-period rolling window comparisons
pub mod rolling;
/// Warmup vs working-set classification
pub mod set_classification;
/// Week-bucketed consistency and streak scoring
pub mod streaks;
/// Set-to-set performance classification within a session
pub mod transitions;
/// Session-level promote/demote verdicts per exercise
pub mod wisdom;

pub use analysis_config::{AnalysisConfig, AnalysisConfigError};
pub use engine::{InsightsEngine, InsightsReport};
pub use expected_reps::{expected_reps_at_weight, ExpectedRepsRange, PriorSetMetrics};
pub use one_rep_max::{estimate_one_rep_max, rpe_adjusted_one_rep_max};
pub use personal_records::{pr_insights, scan_personal_records, PrEvent, PrInsights};
pub use plateau::{
    detect_plateau, session_summaries, HeuristicTrendClassifier, PlateauRecord, SessionSummary,
    TrendBand, TrendClassifier, TrendTag,
};
pub use rolling::{compare_rolling_windows, PeriodStats, RollingWindowComparison};
pub use set_classification::{is_warmup, is_working_set};
pub use streaks::{streak_state, week_start, StreakState};
pub use transitions::{analyze_session_transitions, TransitionResult, TransitionStatus};
pub use wisdom::{classify_exercise_wisdom, ExerciseWisdom, WisdomVerdict};
