// ABOUTME: Classifies consecutive working-set transitions within a session
// ABOUTME: Ordered decision tables over rep deltas and expected-rep projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};

use crate::analysis_config::{AnalysisConfig, TransitionThresholds};
use crate::expected_reps::{expected_reps_at_weight, ExpectedRepsRange, PriorSetMetrics};
use crate::one_rep_max::rpe_adjusted_one_rep_max;
use crate::set_classification::is_working_set;
use liftwise_core::WorkoutSet;

/// Severity tier of a set-to-set transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStatus {
    /// Performance met or beat expectation
    Success,
    /// Expected intra-session behavior, nothing to act on
    Info,
    /// Performance undershot expectation enough to watch
    Warning,
    /// Performance collapsed relative to expectation
    Danger,
}

/// Classification of one working-set-to-working-set step within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult {
    /// Severity tier
    pub status: TransitionStatus,
    /// Short classification title ("Consistent", "Premature Jump", ...)
    pub title: String,
    /// Weight change relative to the previous set, percent
    pub weight_change_pct: f64,
    /// Volume change relative to the previous set, percent
    pub volume_change_pct: f64,
    /// Reps actually completed on the classified set
    pub actual_reps: u32,
    /// Label of the rep range that was expected at this weight
    pub expected_range_label: String,
    /// One-sentence explanation of the classification
    pub why: String,
    /// Optional coaching cue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_improve: Option<String>,
}

/// One row of an ordered decision table
struct Tier {
    matches: bool,
    status: TransitionStatus,
    title: &'static str,
    why: String,
    how_to_improve: Option<String>,
}

/// Percentage change with a guard for non-positive baselines: a move from
/// nothing to something reads as +100, nothing to nothing as 0.
fn percent_change(old: f64, new: f64) -> f64 {
    if old <= 0.0 {
        if new > 0.0 {
            return 100.0;
        }
        return 0.0;
    }
    (new - old) / old * 100.0
}

fn metrics_for(set: &WorkoutSet) -> PriorSetMetrics {
    PriorSetMetrics {
        weight_kg: set.weight_kg,
        reps: set.reps,
        volume_kg: set.volume_kg(),
        one_rep_max: rpe_adjusted_one_rep_max(set.weight_kg, set.reps, set.rpe),
    }
}

fn pick(tiers: Vec<Tier>) -> Option<Tier> {
    tiers.into_iter().find(|t| t.matches)
}

/// Same-weight tiers, classified purely by the rep delta
fn classify_same_weight(
    previous_reps: u32,
    actual_reps: u32,
    first_transition: bool,
    config: &AnalysisConfig,
) -> Option<Tier> {
    let rep_drop_pct = percent_change(f64::from(previous_reps), f64::from(actual_reps)).abs();
    let fatigue_framing = if first_transition {
        "The first set was likely pushed close to failure"
    } else {
        "Fatigue has accumulated across the session"
    };

    pick(vec![
        Tier {
            matches: actual_reps > previous_reps,
            status: TransitionStatus::Success,
            title: "Second Wind",
            why: "More reps at the same weight than the previous set".into(),
            how_to_improve: None,
        },
        Tier {
            matches: actual_reps == previous_reps,
            status: TransitionStatus::Success,
            title: "Consistent",
            why: "Matched the previous set rep for rep".into(),
            how_to_improve: None,
        },
        Tier {
            matches: rep_drop_pct <= config.transition.normal_fatigue_drop_pct,
            status: TransitionStatus::Info,
            title: "Normal Fatigue",
            why: format!("A {rep_drop_pct:.0}% rep drop is ordinary between working sets"),
            how_to_improve: None,
        },
        Tier {
            matches: rep_drop_pct <= config.transition.high_fatigue_drop_pct,
            status: TransitionStatus::Warning,
            title: "High Fatigue",
            why: format!("{fatigue_framing}, costing {rep_drop_pct:.0}% of your reps"),
            how_to_improve: Some("Rest longer between sets or leave a rep in reserve".into()),
        },
        Tier {
            matches: true,
            status: TransitionStatus::Danger,
            title: "Significant Drop",
            why: format!("{fatigue_framing}; a {rep_drop_pct:.0}% rep collapse is a strong signal"),
            how_to_improve: Some(
                "Lower the weight for remaining sets or extend your rest period".into(),
            ),
        },
    ])
}

/// Weight-increase tiers, judged against the expected rep range
fn classify_weight_increase(
    actual_reps: u32,
    expected: &ExpectedRepsRange,
    thresholds: &TransitionThresholds,
) -> Option<Tier> {
    let reps = f64::from(actual_reps);
    let in_range = actual_reps >= expected.min && actual_reps <= expected.max;

    pick(vec![
        Tier {
            matches: actual_reps > expected.max,
            status: TransitionStatus::Success,
            title: "Strong Progress",
            why: format!(
                "Beat the expected {} rep range at the heavier weight",
                expected.label
            ),
            how_to_improve: None,
        },
        Tier {
            matches: in_range || reps >= expected.center - thresholds.good_progress_slack_reps,
            status: TransitionStatus::Success,
            title: "Good Progress",
            why: format!("Hit the expected {} rep range after adding weight", expected.label),
            how_to_improve: None,
        },
        Tier {
            matches: reps >= expected.center.round() - thresholds.ambitious_slack_reps,
            status: TransitionStatus::Warning,
            title: "Slightly Ambitious",
            why: format!(
                "Fell a little short of the expected {} reps at this jump",
                expected.label
            ),
            how_to_improve: Some("Try a smaller weight increase next session".into()),
        },
        Tier {
            matches: true,
            status: TransitionStatus::Danger,
            title: "Premature Jump",
            why: format!(
                "Well below the expected {} reps; the jump outran current capacity",
                expected.label
            ),
            how_to_improve: Some(
                "Build more volume at the previous weight before moving up".into(),
            ),
        },
    ])
}

/// Weight-decrease (back-off) tiers, judged against the expected rep range
fn classify_weight_decrease(
    actual_reps: u32,
    expected: &ExpectedRepsRange,
    thresholds: &TransitionThresholds,
) -> Option<Tier> {
    let reps = f64::from(actual_reps);

    pick(vec![
        Tier {
            matches: actual_reps >= expected.min,
            status: TransitionStatus::Success,
            title: "Effective Backoff",
            why: format!(
                "The lighter weight delivered the expected {} reps of quality volume",
                expected.label
            ),
            how_to_improve: None,
        },
        Tier {
            matches: reps >= expected.center.round() - thresholds.ambitious_slack_reps,
            status: TransitionStatus::Info,
            title: "Fatigued Backoff",
            why: format!(
                "Slightly under the expected {} reps even at reduced weight",
                expected.label
            ),
            how_to_improve: None,
        },
        Tier {
            matches: true,
            status: TransitionStatus::Warning,
            title: "Heavy Fatigue",
            why: format!(
                "Well under the expected {} reps despite dropping weight",
                expected.label
            ),
            how_to_improve: Some("Consider ending the exercise here or resting longer".into()),
        },
    ])
}

/// Classify every adjacent working-set pair of one exercise within one session
///
/// `sets` must belong to a single (exercise, session) pair, ordered by the
/// session ordinal; warmups are ignored. The rolling prior-metrics list is
/// seeded with each earlier set before its successor is classified, so no
/// projection ever sees the set it is predicting.
#[must_use]
pub fn analyze_session_transitions(
    sets: &[&WorkoutSet],
    config: &AnalysisConfig,
) -> Vec<TransitionResult> {
    let working: Vec<&WorkoutSet> = sets.iter().copied().filter(|s| is_working_set(s)).collect();
    let mut results = Vec::new();
    let mut prior: Vec<PriorSetMetrics> = Vec::new();

    for (index, pair) in working.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        prior.push(metrics_for(previous));

        let weight_change_pct = percent_change(previous.weight_kg, current.weight_kg);
        let volume_change_pct = percent_change(previous.volume_kg(), current.volume_kg());
        let first_transition = index == 0;

        // 1-based position of the classified set among this exercise's
        // working sets in the session; drives the fatigue penalty.
        let set_position = (index + 2) as u32;

        let same_weight = weight_change_pct.abs() < config.transition.same_weight_tolerance_pct;
        let (tier, expected_label) = if same_weight {
            let tier =
                classify_same_weight(previous.reps, current.reps, first_transition, config);
            (tier, format!("~{}", previous.reps))
        } else {
            let expected = expected_reps_at_weight(
                &prior,
                current.weight_kg,
                set_position,
                &config.estimator,
            );
            let tier = if weight_change_pct > 0.0 {
                classify_weight_increase(current.reps, &expected, &config.transition)
            } else {
                classify_weight_decrease(current.reps, &expected, &config.transition)
            };
            (tier, expected.label)
        };

        // The final table row always matches, so a tier is always found.
        if let Some(tier) = tier {
            results.push(TransitionResult {
                status: tier.status,
                title: tier.title.into(),
                weight_change_pct,
                volume_change_pct,
                actual_reps: current.reps,
                expected_range_label: expected_label,
                why: tier.why,
                how_to_improve: tier.how_to_improve,
            });
        }
    }

    results
}
