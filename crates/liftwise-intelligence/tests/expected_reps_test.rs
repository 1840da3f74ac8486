// ABOUTME: Unit tests for the expected-reps estimator
// ABOUTME: Validates range invariants, fatigue penalty, and degenerate collapse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftwise_intelligence::{
    estimate_one_rep_max, expected_reps_at_weight, AnalysisConfig, ExpectedRepsRange,
    PriorSetMetrics,
};

fn metrics(weight_kg: f64, reps: u32, one_rep_max: f64) -> PriorSetMetrics {
    PriorSetMetrics {
        weight_kg,
        reps,
        volume_kg: weight_kg * f64::from(reps),
        one_rep_max,
    }
}

fn assert_invariants(range: &ExpectedRepsRange) {
    assert!(range.min >= 1, "min below 1: {range:?}");
    assert!(f64::from(range.min) <= range.center, "min above center: {range:?}");
    assert!(range.center <= f64::from(range.max), "center above max: {range:?}");
    assert!(range.max <= 25, "max above ceiling: {range:?}");
}

#[test]
fn no_prior_sets_collapses_to_degenerate_range() {
    let config = AnalysisConfig::default();
    let range = expected_reps_at_weight(&[], 100.0, 2, &config.estimator);
    assert_eq!(range, ExpectedRepsRange::degenerate());
    assert_eq!(range.label, "~1");
}

#[test]
fn non_positive_target_weight_collapses_to_degenerate_range() {
    let config = AnalysisConfig::default();
    let prior = vec![metrics(100.0, 8, 126.67)];
    let range = expected_reps_at_weight(&prior, 0.0, 2, &config.estimator);
    assert_eq!(range, ExpectedRepsRange::degenerate());
}

#[test]
fn single_prior_set_projects_the_documented_range() {
    // 100 kg x 8 projects a 126.67 kg max; at 110 kg the base prediction is
    // 4.5 reps, minus a 0.4 second-set fatigue penalty: center 4.1, range 3-6.
    let config = AnalysisConfig::default();
    let prior = vec![metrics(100.0, 8, 126.666_666_666_666_67)];
    let range = expected_reps_at_weight(&prior, 110.0, 2, &config.estimator);

    assert!((range.center - 4.1).abs() < 1e-9);
    assert_eq!(range.min, 3);
    assert_eq!(range.max, 6);
    assert_eq!(range.label, "3-6");
    assert_invariants(&range);
}

#[test]
fn prediction_inverts_the_projection_exactly() {
    // A 1RM projected from (100 kg, 8 reps) must predict exactly 8 reps back
    // at 100 kg with no fatigue; the inversion and the projection share the
    // same divisor.
    let config = AnalysisConfig::default();
    let one_rm = estimate_one_rep_max(100.0, 8);
    let prior = vec![metrics(100.0, 8, one_rm)];

    let range = expected_reps_at_weight(&prior, 100.0, 1, &config.estimator);
    assert!((range.center - 8.0).abs() < 1e-9);
}

#[test]
fn fatigue_penalty_is_capped() {
    let config = AnalysisConfig::default();
    let prior = vec![metrics(100.0, 8, 126.67)];
    // Deep into a session the penalty clamps at 3 reps, never more.
    let late = expected_reps_at_weight(&prior, 90.0, 20, &config.estimator);
    let capped = expected_reps_at_weight(&prior, 90.0, 9, &config.estimator);
    assert!((late.center - capped.center).abs() < 1e-9);
    assert_invariants(&late);
}

#[test]
fn target_at_or_above_estimate_predicts_one_rep() {
    let config = AnalysisConfig::default();
    let prior = vec![metrics(100.0, 8, 126.67)];
    let range = expected_reps_at_weight(&prior, 130.0, 1, &config.estimator);
    assert!((range.center - 1.0).abs() < 1e-9);
    assert_eq!(range.min, 1);
    assert_invariants(&range);
}

#[test]
fn only_the_most_recent_sample_drives_the_estimate() {
    let config = AnalysisConfig::default();
    // Ancient monster sets beyond the recent-four window must not leak in.
    let mut prior = vec![metrics(200.0, 10, 266.67)];
    prior.extend((0..4).map(|_| metrics(80.0, 8, 101.33)));
    let range = expected_reps_at_weight(&prior, 80.0, 1, &config.estimator);
    // A 101 kg estimate at 80 kg predicts ~8 reps; 266 kg would predict 25+.
    assert!(range.center < 10.0, "stale sample leaked: {range:?}");
    assert_invariants(&range);
}

#[test]
fn non_positive_prior_maxes_are_discarded() {
    let config = AnalysisConfig::default();
    let prior = vec![
        metrics(0.0, 0, 0.0),
        metrics(-10.0, 5, -12.0),
        metrics(100.0, 8, 126.67),
    ];
    let range = expected_reps_at_weight(&prior, 110.0, 2, &config.estimator);
    assert_eq!(range.label, "3-6");
}

#[test]
fn range_invariants_hold_across_weight_spectrum() {
    let config = AnalysisConfig::default();
    let prior = vec![
        metrics(100.0, 8, 126.67),
        metrics(102.5, 7, 126.42),
        metrics(105.0, 6, 126.0),
        metrics(100.0, 9, 130.0),
    ];
    for target in [20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 500.0] {
        for position in [1, 2, 3, 5, 8] {
            let range = expected_reps_at_weight(&prior, target, position, &config.estimator);
            assert_invariants(&range);
        }
    }
}
