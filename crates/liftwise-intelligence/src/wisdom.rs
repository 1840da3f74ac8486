// ABOUTME: Session-level promote/demote verdicts for one exercise
// ABOUTME: Ordered decision table over the session's top-weight sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};

use crate::analysis_config::AnalysisConfig;
use crate::set_classification::is_working_set;
use liftwise_core::WorkoutSet;

/// Direction of a session verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WisdomVerdict {
    /// The exercise is ready for more load
    Promote,
    /// The load is currently too heavy
    Demote,
}

/// A session-scoped verdict for one exercise
///
/// Only exists when the evidence crosses a threshold; sessions with no clear
/// signal produce no wisdom at all rather than a neutral placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseWisdom {
    /// Direction of the verdict
    pub verdict: WisdomVerdict,
    /// Short title ("Ready to Progress", "Inconsistent", ...)
    pub title: String,
    /// Human-readable suggestion
    pub suggestion: String,
}

/// Derive a session verdict from one exercise's working sets
///
/// Looks only at "top-weight" sets, those within 95% of the heaviest weight
/// used, since back-off work says little about readiness at the top end.
/// Returns `None` when no tier of the decision table fires.
#[must_use]
pub fn classify_exercise_wisdom(
    sets: &[&WorkoutSet],
    config: &AnalysisConfig,
) -> Option<ExerciseWisdom> {
    let working: Vec<&WorkoutSet> = sets.iter().copied().filter(|s| is_working_set(s)).collect();
    if working.is_empty() {
        return None;
    }

    let max_weight = working
        .iter()
        .map(|s| s.weight_kg)
        .fold(f64::NEG_INFINITY, f64::max);
    let top_sets: Vec<&WorkoutSet> = working
        .iter()
        .copied()
        .filter(|s| s.weight_kg >= max_weight * config.wisdom.top_weight_fraction)
        .collect();
    if top_sets.is_empty() {
        return None;
    }

    let min_reps = top_sets.iter().map(|s| s.reps).min().unwrap_or(0);
    let max_reps = top_sets.iter().map(|s| s.reps).max().unwrap_or(0);
    let target = config.wisdom.target_reps;

    // Ordered decision table; first matching row wins.
    let rows: Vec<(bool, ExerciseWisdom)> = vec![
        (
            min_reps >= target,
            ExerciseWisdom {
                verdict: WisdomVerdict::Promote,
                title: "Ready to Progress".into(),
                suggestion: if min_reps >= config.wisdom.big_jump_min_reps {
                    "Every top set cleared the target with room to spare; increase the weight by 5-10%".into()
                } else {
                    "Every top set reached the rep target; increase the weight by 2.5-5%".into()
                },
            },
        ),
        (
            max_reps < config.wisdom.low_rep_ceiling,
            ExerciseWisdom {
                verdict: WisdomVerdict::Demote,
                title: "Load Too Heavy".into(),
                suggestion: "Top sets stalled below 5 reps; reduce the weight by 5-10% and rebuild".into(),
            },
        ),
        (
            top_sets.len() >= 2
                && min_reps + 3 < target
                && max_reps >= target,
            ExerciseWisdom {
                verdict: WisdomVerdict::Demote,
                title: "Inconsistent".into(),
                suggestion: "Rep counts swing widely at the top weight; lower the weight slightly or rest longer between sets".into(),
            },
        ),
    ];

    rows.into_iter().find(|(matches, _)| *matches).map(|(_, w)| w)
}
