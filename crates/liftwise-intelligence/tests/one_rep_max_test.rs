// ABOUTME: Unit tests for the Epley one-rep-max projection
// ABOUTME: Covers the rep cap, non-positive inputs, and the RPE adjustment band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftwise_intelligence::{estimate_one_rep_max, rpe_adjusted_one_rep_max};

const EPS: f64 = 1e-9;

#[test]
fn epley_projection_from_submaximal_set() {
    // 100 kg x 8 reps: 100 * (1 + 8/30)
    let one_rm = estimate_one_rep_max(100.0, 8);
    assert!((one_rm - 126.666_666_666_666_67).abs() < EPS);
}

#[test]
fn single_rep_set_projects_slightly_above_weight() {
    let one_rm = estimate_one_rep_max(140.0, 1);
    assert!((one_rm - 140.0 * (1.0 + 1.0 / 30.0)).abs() < EPS);
}

#[test]
fn reps_are_capped_at_twelve() {
    let at_cap = estimate_one_rep_max(60.0, 12);
    let above_cap = estimate_one_rep_max(60.0, 20);
    assert!((at_cap - above_cap).abs() < EPS);
}

#[test]
fn non_positive_inputs_project_zero() {
    assert!(estimate_one_rep_max(0.0, 8).abs() < EPS);
    assert!(estimate_one_rep_max(-50.0, 8).abs() < EPS);
    assert!(estimate_one_rep_max(100.0, 0).abs() < EPS);
}

#[test]
fn low_rpe_inflates_the_estimate() {
    let base = estimate_one_rep_max(100.0, 8);

    // RPE 8 means a rep in reserve: (9 - 8) * 0.02 = +2%
    let adjusted = rpe_adjusted_one_rep_max(100.0, 8, Some(8.0));
    assert!((adjusted - base * 1.02).abs() < EPS);

    // RPE 6 is the bottom of the trusted band: +6%
    let adjusted = rpe_adjusted_one_rep_max(100.0, 8, Some(6.0));
    assert!((adjusted - base * 1.06).abs() < EPS);
}

#[test]
fn rpe_at_or_above_neutral_never_deflates() {
    let base = estimate_one_rep_max(100.0, 8);
    // (9 - 10) * 0.02 is negative and clamps to zero adjustment
    let adjusted = rpe_adjusted_one_rep_max(100.0, 8, Some(10.0));
    assert!((adjusted - base).abs() < EPS);
}

#[test]
fn rpe_outside_trusted_band_is_ignored() {
    let base = estimate_one_rep_max(100.0, 8);
    assert!((rpe_adjusted_one_rep_max(100.0, 8, Some(5.0)) - base).abs() < EPS);
    assert!((rpe_adjusted_one_rep_max(100.0, 8, Some(11.0)) - base).abs() < EPS);
    assert!((rpe_adjusted_one_rep_max(100.0, 8, None) - base).abs() < EPS);
}
