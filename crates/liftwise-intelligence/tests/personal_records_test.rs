// ABOUTME: Integration tests for the personal-record scan and PR insights
// ABOUTME: Validates running-best monotonicity, warmup exclusion, and drought math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;

use common::{ts, warmup_set, working_set};
use liftwise_intelligence::{pr_insights, scan_personal_records, AnalysisConfig};

#[test]
fn first_working_set_of_an_exercise_is_a_record() {
    let sets = vec![working_set(
        "Bench Press",
        100.0,
        8,
        1,
        "s1",
        "2025-06-02T18:00:00Z",
    )];
    let events = scan_personal_records(&sets);

    assert_eq!(events.len(), 1);
    assert!((events[0].weight_kg - 100.0).abs() < 1e-9);
    assert!(events[0].previous_best_kg.abs() < 1e-9);
}

#[test]
fn only_strict_weight_increases_are_records() {
    let sets = vec![
        working_set("Bench Press", 100.0, 8, 1, "s1", "2025-06-02T18:00:00Z"),
        working_set("Bench Press", 100.0, 9, 2, "s1", "2025-06-02T18:05:00Z"),
        working_set("Bench Press", 110.0, 5, 1, "s2", "2025-06-09T18:00:00Z"),
        working_set("Bench Press", 105.0, 8, 2, "s2", "2025-06-09T18:05:00Z"),
    ];
    let events = scan_personal_records(&sets);

    let weights: Vec<f64> = events.iter().map(|e| e.weight_kg).collect();
    assert_eq!(weights, vec![100.0, 110.0]);
}

#[test]
fn running_best_is_non_decreasing_per_exercise() {
    let sets = vec![
        working_set("Squat", 100.0, 5, 1, "s1", "2025-06-02T18:00:00Z"),
        working_set("Squat", 120.0, 3, 2, "s1", "2025-06-02T18:05:00Z"),
        working_set("Squat", 110.0, 5, 1, "s2", "2025-06-09T18:00:00Z"),
        working_set("Squat", 125.0, 2, 2, "s2", "2025-06-09T18:05:00Z"),
        working_set("Deadlift", 140.0, 5, 3, "s2", "2025-06-09T18:10:00Z"),
    ];
    let events = scan_personal_records(&sets);

    let mut best: BTreeMap<&str, f64> = BTreeMap::new();
    for event in &events {
        let prior = best.get(event.exercise.as_str()).copied().unwrap_or(0.0);
        assert!((event.previous_best_kg - prior).abs() < 1e-9);
        assert!(event.weight_kg > prior, "PR must strictly beat the running best");
        best.insert(event.exercise.as_str(), event.weight_kg);
    }
}

#[test]
fn warmups_never_qualify_nor_update_the_running_best() {
    let sets = vec![
        warmup_set("Bench Press", 120.0, 1, 1, "s1", "2025-06-02T18:00:00Z"),
        working_set("Bench Press", 100.0, 8, 2, "s1", "2025-06-02T18:05:00Z"),
    ];
    let events = scan_personal_records(&sets);

    assert_eq!(events.len(), 1);
    assert!((events[0].weight_kg - 100.0).abs() < 1e-9);
}

#[test]
fn non_positive_weight_or_reps_are_excluded() {
    let sets = vec![
        working_set("Plank", 0.0, 1, 1, "s1", "2025-06-02T18:00:00Z"),
        working_set("Bench Press", 100.0, 0, 2, "s1", "2025-06-02T18:05:00Z"),
    ];
    assert!(scan_personal_records(&sets).is_empty());
}

#[test]
fn input_order_does_not_change_the_events() {
    let sorted = vec![
        working_set("Squat", 100.0, 5, 1, "s1", "2025-06-02T18:00:00Z"),
        working_set("Squat", 110.0, 5, 1, "s2", "2025-06-09T18:00:00Z"),
        working_set("Squat", 120.0, 5, 1, "s3", "2025-06-16T18:00:00Z"),
    ];
    let mut shuffled = sorted.clone();
    shuffled.swap(0, 2);

    assert_eq!(scan_personal_records(&sorted), scan_personal_records(&shuffled));
}

#[test]
fn undated_sets_are_excluded_from_the_scan() {
    let sets = vec![common::undated_set("Squat", 200.0, 5, 1, "s1")];
    assert!(scan_personal_records(&sets).is_empty());
}

#[test]
fn drought_flags_after_a_quiet_fortnight() {
    let config = AnalysisConfig::default();
    let now = ts("2025-07-01T12:00:00Z");

    let recent = vec![working_set("Squat", 100.0, 5, 1, "s1", "2025-06-25T18:00:00Z")];
    let events = scan_personal_records(&recent);
    let insights = pr_insights(&events, now, &config.records);
    assert!(!insights.in_drought);
    assert_eq!(insights.days_since_last_pr, Some(5));

    let stale = vec![working_set("Squat", 100.0, 5, 1, "s1", "2025-06-01T18:00:00Z")];
    let events = scan_personal_records(&stale);
    let insights = pr_insights(&events, now, &config.records);
    assert!(insights.in_drought);
}

#[test]
fn pr_frequency_is_reported_per_week() {
    let config = AnalysisConfig::default();
    let now = ts("2025-07-01T12:00:00Z");
    let sets = vec![
        working_set("Squat", 100.0, 5, 1, "s1", "2025-06-10T18:00:00Z"),
        working_set("Squat", 105.0, 5, 1, "s2", "2025-06-17T18:00:00Z"),
        working_set("Squat", 110.0, 5, 1, "s3", "2025-06-24T18:00:00Z"),
        working_set("Squat", 115.0, 5, 1, "s4", "2025-06-30T18:00:00Z"),
    ];
    let events = scan_personal_records(&sets);
    let insights = pr_insights(&events, now, &config.records);

    // Four PRs inside the trailing month, over four weeks.
    assert!((insights.prs_per_week_last_month - 1.0).abs() < 1e-9);
    assert_eq!(insights.total_prs, 4);
}

#[test]
fn empty_history_reports_no_drought() {
    let config = AnalysisConfig::default();
    let insights = pr_insights(&[], ts("2025-07-01T12:00:00Z"), &config.records);

    assert_eq!(insights.total_prs, 0);
    assert!(insights.last_pr_date.is_none());
    assert!(!insights.in_drought);
    assert!(insights.prs_per_week_last_month.abs() < 1e-9);
}
