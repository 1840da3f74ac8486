// ABOUTME: Facade running every analysis pass into one serializable report
// ABOUTME: Pure function of (sets, now, config); deterministic and idempotent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::AnalysisConfig;
use crate::personal_records::{pr_insights, scan_personal_records, PrInsights};
use crate::plateau::{
    detect_plateau, session_summaries, HeuristicTrendClassifier, PlateauRecord, TrendClassifier,
};
use crate::rolling::{compare_rolling_windows, RollingWindowComparison};
use crate::streaks::{streak_state, StreakState};
use crate::transitions::{analyze_session_transitions, TransitionResult};
use crate::wisdom::{classify_exercise_wisdom, ExerciseWisdom};
use liftwise_core::{group_by_exercise, group_by_exercise_and_session, WorkoutSet};

/// Rolling window lengths the engine always evaluates, in days
const ROLLING_WINDOWS: [u32; 2] = [7, 28];

/// The complete derived-insight snapshot for one log
///
/// Plain serializable data throughout: every map is a `BTreeMap` and every
/// vector is deterministically ordered, so identical input (same sets, same
/// `now`) serializes byte-identically on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Per-transition results keyed by exercise, then session
    pub transitions: BTreeMap<String, BTreeMap<String, Vec<TransitionResult>>>,
    /// Session verdicts keyed by exercise, then session; absent when no signal
    pub wisdom: BTreeMap<String, BTreeMap<String, ExerciseWisdom>>,
    /// Plateau records keyed by exercise; only stagnant exercises appear
    pub plateaus: BTreeMap<String, PlateauRecord>,
    /// Rolling comparisons keyed by window length in days
    pub rolling: BTreeMap<u32, RollingWindowComparison>,
    /// Week-bucketed streak snapshot
    pub streak: StreakState,
    /// Personal-record snapshot
    pub personal_records: PrInsights,
}

/// Entry point for the insights engine
///
/// Holds the analysis configuration and the trend seam; carries no other
/// state between calls.
pub struct InsightsEngine {
    config: AnalysisConfig,
    trend_classifier: Box<dyn TrendClassifier>,
}

impl Default for InsightsEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl InsightsEngine {
    /// Build an engine with the default heuristic trend classifier
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        let trend_classifier = Box::new(HeuristicTrendClassifier::from_config(&config.plateau));
        Self {
            config,
            trend_classifier,
        }
    }

    /// Build an engine around an external trend core
    #[must_use]
    pub fn with_trend_classifier(
        config: AnalysisConfig,
        trend_classifier: Box<dyn TrendClassifier>,
    ) -> Self {
        Self {
            config,
            trend_classifier,
        }
    }

    /// The configuration this engine analyzes with
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every analysis pass over `sets` as of `now`
    ///
    /// The input may arrive in any order; every temporal pass sorts its own
    /// borrowed copy. Sets without resolved timestamps contribute to the
    /// session-scoped results (transitions, wisdom) but never to windows,
    /// streaks, plateaus, or personal records.
    #[must_use]
    pub fn analyze(&self, sets: &[WorkoutSet], now: DateTime<Utc>) -> InsightsReport {
        debug!(total_sets = sets.len(), %now, "running insights analysis");

        let mut transitions: BTreeMap<String, BTreeMap<String, Vec<TransitionResult>>> =
            BTreeMap::new();
        let mut wisdom: BTreeMap<String, BTreeMap<String, ExerciseWisdom>> = BTreeMap::new();

        for (exercise, sessions) in group_by_exercise_and_session(sets) {
            for (session_key, session_sets) in sessions {
                let session_transitions =
                    analyze_session_transitions(&session_sets, &self.config);
                if !session_transitions.is_empty() {
                    transitions
                        .entry(exercise.clone())
                        .or_default()
                        .insert(session_key.clone(), session_transitions);
                }

                if let Some(verdict) = classify_exercise_wisdom(&session_sets, &self.config) {
                    wisdom
                        .entry(exercise.clone())
                        .or_default()
                        .insert(session_key, verdict);
                }
            }
        }

        let mut plateaus = BTreeMap::new();
        for (exercise, series) in group_by_exercise(sets) {
            let summaries = session_summaries(&series);
            if let Some(record) = detect_plateau(
                &exercise,
                &summaries,
                now,
                self.trend_classifier.as_ref(),
                &self.config.plateau,
            ) {
                plateaus.insert(exercise, record);
            }
        }

        let pr_events = scan_personal_records(sets);
        let personal_records = pr_insights(&pr_events, now, &self.config.records);

        let rolling = ROLLING_WINDOWS
            .iter()
            .map(|days| {
                (
                    *days,
                    compare_rolling_windows(sets, &pr_events, now, *days, &self.config.rolling),
                )
            })
            .collect();

        let streak = streak_state(sets, now);

        InsightsReport {
            transitions,
            wisdom,
            plateaus,
            rolling,
            streak,
            personal_records,
        }
    }
}
