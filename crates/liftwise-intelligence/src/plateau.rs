// ABOUTME: Multi-session plateau detection for exercises stuck at one weight
// ABOUTME: Consumes a swappable trend classification behind a narrow trait seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::PlateauConfig;
use crate::set_classification::is_working_set;
use crate::streaks::week_start;
use liftwise_core::constants::scheduling::DAYS_PER_WEEK;
use liftwise_core::WorkoutSet;

/// Three-way trend classification for an exercise's full history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendTag {
    /// Load is still climbing
    Overload,
    /// Stuck at one weight and rep band
    Stagnant,
    /// No clear pattern
    Other,
}

/// The dominant (weight, rep-band) pair backing a trend classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendBand {
    /// Dominant working weight in kilograms
    pub weight_kg: f64,
    /// Lower edge of the dominant rep band
    pub min_reps: u32,
    /// Upper edge of the dominant rep band
    pub max_reps: u32,
}

/// One session of an exercise, reduced to the fields trend analysis needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session grouping key
    pub session_key: String,
    /// Earliest set timestamp in the session
    pub date: DateTime<Utc>,
    /// Heaviest working weight of the session
    pub top_weight_kg: f64,
    /// Most frequent working weight (ties break toward the heavier weight)
    pub dominant_weight_kg: f64,
    /// Rounded mean reps at the dominant weight
    pub effective_reps: u32,
}

/// Per-exercise plateau finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauRecord {
    /// Exercise stuck on the plateau
    pub exercise: String,
    /// Calendar weeks spent at the plateau weight, at least 1
    pub weeks_at_same_weight: u32,
    /// The plateau weight in kilograms
    pub weight_kg: f64,
    /// Suggested next step
    pub suggestion: String,
}

/// The narrow seam to the trend core
///
/// The plateau detector only needs a three-way tag plus the dominant
/// (weight, rep-band) pair, so any richer trend engine can sit behind this
/// trait, and tests can stub it outright.
pub trait TrendClassifier {
    /// Classify an exercise from its chronological session summaries
    fn classify(&self, sessions: &[SessionSummary]) -> (TrendTag, Option<TrendBand>);
}

/// Default trend heuristic over recent session summaries
#[derive(Debug, Clone)]
pub struct HeuristicTrendClassifier {
    /// Weight tolerance when comparing sessions (kg)
    pub weight_epsilon_kg: f64,
    /// Sessions the dominant weight must repeat before calling stagnation
    pub min_stagnant_sessions: usize,
}

impl HeuristicTrendClassifier {
    /// Build a classifier from plateau configuration
    #[must_use]
    pub const fn from_config(config: &PlateauConfig) -> Self {
        Self {
            weight_epsilon_kg: config.weight_epsilon_kg,
            min_stagnant_sessions: config.min_stagnant_sessions,
        }
    }
}

impl TrendClassifier for HeuristicTrendClassifier {
    fn classify(&self, sessions: &[SessionSummary]) -> (TrendTag, Option<TrendBand>) {
        if sessions.len() < self.min_stagnant_sessions {
            return (TrendTag::Other, None);
        }
        let recent = &sessions[sessions.len() - self.min_stagnant_sessions..];

        let first_top = recent[0].top_weight_kg;
        let last_top = recent[recent.len() - 1].top_weight_kg;
        if last_top > first_top + self.weight_epsilon_kg {
            return (TrendTag::Overload, None);
        }

        let anchor = recent[recent.len() - 1].dominant_weight_kg;
        let same_weight = recent
            .iter()
            .all(|s| (s.dominant_weight_kg - anchor).abs() <= self.weight_epsilon_kg);
        let min_reps = recent.iter().map(|s| s.effective_reps).min().unwrap_or(0);
        let max_reps = recent.iter().map(|s| s.effective_reps).max().unwrap_or(0);

        if same_weight && max_reps.saturating_sub(min_reps) <= 2 {
            return (
                TrendTag::Stagnant,
                Some(TrendBand {
                    weight_kg: anchor,
                    min_reps,
                    max_reps,
                }),
            );
        }
        (TrendTag::Other, None)
    }
}

/// Reduce one exercise's working sets to chronological session summaries
///
/// Only sets with resolved timestamps contribute; a session with no dated
/// working sets produces no summary.
#[must_use]
pub fn session_summaries(sets: &[&WorkoutSet]) -> Vec<SessionSummary> {
    let mut by_session: BTreeMap<&str, Vec<&WorkoutSet>> = BTreeMap::new();
    for set in sets {
        if is_working_set(set) && set.timestamp.is_some() {
            by_session.entry(set.session_key.as_str()).or_default().push(set);
        }
    }

    let mut summaries: Vec<SessionSummary> = by_session
        .into_iter()
        .filter_map(|(key, session)| {
            let date = session.iter().filter_map(|s| s.timestamp).min()?;
            let top_weight_kg = session
                .iter()
                .map(|s| s.weight_kg)
                .fold(f64::NEG_INFINITY, f64::max);

            // Dominant weight: highest set count, heavier weight on ties.
            let mut counts: Vec<(f64, usize)> = Vec::new();
            for set in &session {
                match counts
                    .iter_mut()
                    .find(|(w, _)| (*w - set.weight_kg).abs() < f64::EPSILON)
                {
                    Some((_, n)) => *n += 1,
                    None => counts.push((set.weight_kg, 1)),
                }
            }
            let (dominant_weight_kg, _) = counts
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then(a.0.total_cmp(&b.0)))?;

            let at_dominant: Vec<u32> = session
                .iter()
                .filter(|s| (s.weight_kg - dominant_weight_kg).abs() < f64::EPSILON)
                .map(|s| s.reps)
                .collect();
            let effective_reps = if at_dominant.is_empty() {
                0
            } else {
                (at_dominant.iter().map(|r| f64::from(*r)).sum::<f64>()
                    / at_dominant.len() as f64)
                    .round() as u32
            };

            Some(SessionSummary {
                session_key: key.to_owned(),
                date,
                top_weight_kg,
                dominant_weight_kg,
                effective_reps,
            })
        })
        .collect();

    summaries.sort_by_key(|s| s.date);
    summaries
}

/// Detect whether an exercise is currently parked on a plateau
///
/// Only exercises the trend seam labels stagnant can produce a record. The
/// detector walks session summaries from most recent backward, keeping
/// sessions whose dominant weight sits within epsilon of the plateau weight
/// and whose effective reps fall inside the slack-widened band, and stops at
/// the first session that breaks the pattern.
#[must_use]
pub fn detect_plateau(
    exercise: &str,
    summaries: &[SessionSummary],
    now: DateTime<Utc>,
    classifier: &dyn TrendClassifier,
    config: &PlateauConfig,
) -> Option<PlateauRecord> {
    let (tag, band) = classifier.classify(summaries);
    if tag != TrendTag::Stagnant {
        return None;
    }
    let band = band?;

    let slack = config.rep_band_slack;
    let low = band.min_reps.saturating_sub(slack);
    let high = band.max_reps + slack;

    let earliest_matching = summaries
        .iter()
        .rev()
        .take_while(|s| {
            (s.dominant_weight_kg - band.weight_kg).abs() <= config.weight_epsilon_kg
                && (low..=high).contains(&s.effective_reps)
        })
        .last()?;

    let this_week = week_start(now.date_naive());
    let plateau_week = week_start(earliest_matching.date.date_naive());
    let weeks_between = (this_week - plateau_week).num_days() / DAYS_PER_WEEK;
    let weeks_at_same_weight = weeks_between.max(1) as u32;

    let bodyweight_like = band.weight_kg <= config.weight_epsilon_kg;
    let suggestion = if bodyweight_like {
        "Stuck at bodyweight; add a rep to each set or an extra set before loading".to_owned()
    } else {
        format!(
            "Stuck at {:.1} kg; try adding {:.1} kg next session",
            band.weight_kg, config.standard_increment_kg
        )
    };

    debug!(
        exercise,
        weeks_at_same_weight,
        weight_kg = band.weight_kg,
        "plateau detected"
    );

    Some(PlateauRecord {
        exercise: exercise.to_owned(),
        weeks_at_same_weight,
        weight_kg: band.weight_kg,
        suggestion,
    })
}
