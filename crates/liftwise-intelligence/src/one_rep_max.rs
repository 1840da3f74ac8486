// ABOUTME: One-rep-max projection from submaximal sets via the Epley formula
// ABOUTME: Optional RPE adjustment models effort undershoot on hard top sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use liftwise_core::constants::{effort_rating, one_rep_max};

/// Project a single-rep maximum from a (weight, reps) pair
///
/// Uses the Epley formula `w * (1 + reps / 30)` with reps capped at 12; the
/// linear model degrades badly at high rep counts. Returns 0 when either
/// input is non-positive.
#[must_use]
pub fn estimate_one_rep_max(weight_kg: f64, reps: u32) -> f64 {
    if weight_kg <= 0.0 || reps == 0 {
        return 0.0;
    }
    let capped = reps.min(one_rep_max::EPLEY_REP_CAP);
    weight_kg * (1.0 + f64::from(capped) / one_rep_max::EPLEY_DIVISOR)
}

/// Project a single-rep maximum with an effort-rating correction
///
/// A low RPE on a completed set means the lifter stopped short of failure, so
/// the raw Epley projection undersells true capacity. The estimate is scaled
/// by `1 + clamp((9 - rpe) * 0.02, 0, 0.1)` when the rating falls inside the
/// trusted [6, 10] band; ratings outside that band carry no signal and leave
/// the raw estimate unchanged.
#[must_use]
pub fn rpe_adjusted_one_rep_max(weight_kg: f64, reps: u32, rpe: Option<f64>) -> f64 {
    let base = estimate_one_rep_max(weight_kg, reps);
    let Some(rpe) = rpe else {
        return base;
    };
    if !(effort_rating::MIN_VALID_RPE..=effort_rating::MAX_VALID_RPE).contains(&rpe) {
        return base;
    }
    let adjustment = ((effort_rating::NEUTRAL_RPE - rpe) * effort_rating::ADJUSTMENT_PER_POINT)
        .clamp(0.0, effort_rating::MAX_ADJUSTMENT);
    base * (1.0 + adjustment)
}
