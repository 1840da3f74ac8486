// ABOUTME: Strength-training constants used throughout the insights engine
// ABOUTME: Groups estimation, effort-rating, and scheduling constants by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Strength-training constants based on established coaching practice
//!
//! This module contains the constants used throughout the insights engine.
//! Values follow widely used strength-training references rather than being
//! tuned per user; anything a deployment may want to tune lives in
//! `AnalysisConfig` instead.

/// One-rep-max projection constants
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout, University of Nebraska
pub mod one_rep_max {
    /// Divisor of the Epley linear projection `w * (1 + reps / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;

    /// Rep count above which the linear Epley model degrades badly.
    /// Reps are capped here before projection.
    pub const EPLEY_REP_CAP: u32 = 12;
}

/// Subjective effort (RPE) handling
///
/// References:
/// - Zourdos, M.C. et al. (2016). Novel resistance training-specific rating
///   of perceived exertion scale measuring repetitions in reserve
pub mod effort_rating {
    /// Lowest RPE value treated as meaningful signal
    pub const MIN_VALID_RPE: f64 = 6.0;

    /// Highest RPE value treated as meaningful signal
    pub const MAX_VALID_RPE: f64 = 10.0;

    /// Reference RPE at which no 1RM adjustment is applied
    pub const NEUTRAL_RPE: f64 = 9.0;

    /// 1RM adjustment per RPE point below neutral
    pub const ADJUSTMENT_PER_POINT: f64 = 0.02;

    /// Upper bound on the total RPE-based 1RM adjustment
    pub const MAX_ADJUSTMENT: f64 = 0.1;
}

/// Rep-range prediction bounds
pub mod rep_prediction {
    /// Display ceiling for predicted rep ranges. Very light back-off sets
    /// would otherwise project absurd rep counts.
    pub const MAX_DISPLAY_REPS: f64 = 25.0;

    /// Floor for any predicted rep value
    pub const MIN_PREDICTED_REPS: f64 = 1.0;
}

/// Calendar and scheduling constants
pub mod scheduling {
    /// Days in a calendar week, used for week bucketing and streak math
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Days without a new personal record before flagging a drought
    pub const PR_DROUGHT_DAYS: i64 = 14;

    /// Trailing window used for PR frequency reporting
    pub const PR_FREQUENCY_WINDOW_DAYS: i64 = 30;
}

/// Equipment-driven loading constants
pub mod loading {
    /// Smallest commonly available plate pair increment in kilograms
    pub const STANDARD_INCREMENT_KG: f64 = 2.5;
}
