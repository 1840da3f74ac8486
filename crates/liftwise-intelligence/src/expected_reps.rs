// ABOUTME: Projects a plausible rep range at a target weight from prior working sets
// ABOUTME: Percentile-based 1RM sampling with positional fatigue penalty and IQR spread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::EstimatorConfig;
use liftwise_core::constants::one_rep_max::EPLEY_DIVISOR;
use liftwise_core::constants::rep_prediction::{MAX_DISPLAY_REPS, MIN_PREDICTED_REPS};

/// Per-set metrics carried forward while walking a session
///
/// The rolling prior-metrics list never includes the set currently being
/// evaluated, which keeps every projection free of lookahead bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorSetMetrics {
    /// Load in kilograms
    pub weight_kg: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Tonnage of the set
    pub volume_kg: f64,
    /// RPE-adjusted one-rep-max projection for the set
    pub one_rep_max: f64,
}

/// A projected rep range at a target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRepsRange {
    /// Lower bound, 1..=25
    pub min: u32,
    /// Point estimate before widening, `min <= center <= max`
    pub center: f64,
    /// Upper bound, `min..=25`
    pub max: u32,
    /// Display label, `"~n"` when the range collapses, `"a-b"` otherwise
    pub label: String,
}

impl ExpectedRepsRange {
    /// The degenerate range every edge case collapses to
    #[must_use]
    pub fn degenerate() -> Self {
        Self {
            min: 1,
            center: 1.0,
            max: 1,
            label: "~1".into(),
        }
    }

    fn labelled(min: u32, center: f64, max: u32) -> Self {
        let label = if min == max {
            format!("~{min}")
        } else {
            format!("{min}-{max}")
        };
        Self {
            min,
            center,
            max,
            label,
        }
    }
}

/// Interpolated percentile of an unsorted sample; `None` on an empty sample
fn percentile(sample: &[f64], pct: f64) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    if sorted.len() == 1 {
        return Some(sorted[0]);
    }
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let fraction = rank - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

fn median(sample: &[f64]) -> Option<f64> {
    percentile(sample, 50.0)
}

/// Predict how many reps a lifter can complete at `weight_kg` given a 1RM,
/// inverting the Epley projection and rounding to one decimal. Collapses to
/// a single rep at or above the estimated maximum.
fn predict_reps(one_rep_max: f64, weight_kg: f64) -> f64 {
    if weight_kg >= one_rep_max {
        return MIN_PREDICTED_REPS;
    }
    let raw = EPLEY_DIVISOR * (one_rep_max / weight_kg - 1.0);
    let rounded = (raw * 10.0).round() / 10.0;
    rounded.max(MIN_PREDICTED_REPS)
}

/// Project a plausible rep range at `target_weight_kg`
///
/// `prior` is the chronologically ordered list of working sets already
/// performed for the exercise; `set_position` is the 1-based position of the
/// set being predicted within its session. Degenerate inputs (no usable
/// prior 1RMs, non-positive target weight) collapse to `{1, 1, 1, "~1"}`
/// rather than failing.
#[must_use]
pub fn expected_reps_at_weight(
    prior: &[PriorSetMetrics],
    target_weight_kg: f64,
    set_position: u32,
    config: &EstimatorConfig,
) -> ExpectedRepsRange {
    let candidates: Vec<f64> = prior
        .iter()
        .map(|m| m.one_rep_max)
        .filter(|v| *v > 0.0 && v.is_finite())
        .collect();

    if candidates.is_empty() || target_weight_kg <= 0.0 {
        debug!(
            target_weight_kg,
            prior_sets = prior.len(),
            "no usable prior 1RM sample, returning degenerate rep range"
        );
        return ExpectedRepsRange::degenerate();
    }

    let recent_start = candidates.len().saturating_sub(config.recent_sample_size);
    let recent = &candidates[recent_start..];

    // 75th percentile of the recent sample, falling back to the median of
    // the full candidate list if the percentile degenerates.
    let estimate = percentile(recent, 75.0)
        .filter(|v| v.is_finite() && *v > 0.0)
        .or_else(|| median(&candidates))
        .unwrap_or(0.0);
    if estimate <= 0.0 {
        return ExpectedRepsRange::degenerate();
    }

    let base_predicted = predict_reps(estimate, target_weight_kg);

    let sets_already_done = f64::from(set_position.saturating_sub(1));
    let fatigue_penalty = (config.fatigue_penalty_per_set * sets_already_done)
        .clamp(0.0, config.max_fatigue_penalty);

    let center = (base_predicted - fatigue_penalty)
        .max(MIN_PREDICTED_REPS)
        .min(MAX_DISPLAY_REPS);

    let spread_pct = match (percentile(recent, 75.0), percentile(recent, 25.0), median(recent)) {
        (Some(q75), Some(q25), Some(med)) if med > 0.0 => (q75 - q25) / med,
        _ => 0.0,
    };
    let half_width = (1.0 + (spread_pct * 3.0).round()).clamp(1.0, 3.0);

    let min = (center - half_width)
        .floor()
        .clamp(MIN_PREDICTED_REPS, MAX_DISPLAY_REPS) as u32;
    let max = (center + half_width)
        .ceil()
        .clamp(f64::from(min), MAX_DISPLAY_REPS) as u32;

    ExpectedRepsRange::labelled(min, center, max.max(min))
}
