// ABOUTME: Configuration-driven constants for insight analysis replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable parameters for all analysis passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis configuration errors
#[derive(Debug, Error)]
pub enum AnalysisConfigError {
    /// An environment override could not be parsed
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// The assembled configuration is internally inconsistent
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Expected-reps estimator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Number of most recent prior sets forming the working sample
    pub recent_sample_size: usize,

    /// Rep penalty applied per working set already performed in the session
    pub fatigue_penalty_per_set: f64,

    /// Upper bound on the total fatigue penalty (reps)
    pub max_fatigue_penalty: f64,
}

/// Set-to-set transition classification thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionThresholds {
    /// Weight changes below this percentage count as "same weight"
    pub same_weight_tolerance_pct: f64,

    /// Rep drops up to this percentage are normal intra-session fatigue
    pub normal_fatigue_drop_pct: f64,

    /// Rep drops up to this percentage are high but recoverable fatigue;
    /// anything above is a significant drop
    pub high_fatigue_drop_pct: f64,

    /// Reps may undershoot the predicted center by this much and still
    /// count as good progress after a weight increase
    pub good_progress_slack_reps: f64,

    /// Reps may undershoot the rounded center by this much before a weight
    /// change is classified as premature / heavy fatigue
    pub ambitious_slack_reps: f64,
}

/// Session-verdict (wisdom) thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WisdomThresholds {
    /// Rep target a top-weight set should reach before a load increase
    pub target_reps: u32,

    /// Fraction of the session's max weight that still counts as top weight
    pub top_weight_fraction: f64,

    /// Below this many reps on every top-weight set, the load is too heavy
    pub low_rep_ceiling: u32,

    /// Minimum reps at which the larger load-increase suggestion applies
    pub big_jump_min_reps: u32,
}

/// Plateau detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Weight tolerance (kg) when matching sessions against the plateau weight
    pub weight_epsilon_kg: f64,

    /// Rep-band slack applied on both ends when matching sessions
    pub rep_band_slack: u32,

    /// Sessions the dominant weight must repeat before calling stagnation
    pub min_stagnant_sessions: usize,

    /// Equipment increment suggested to break a weighted plateau (kg)
    pub standard_increment_kg: f64,
}

/// Rolling window comparison parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingConfig {
    /// Unique sessions both windows need before deltas are meaningful
    pub min_workouts_required: usize,
}

/// Personal-record insight parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Days without a PR before flagging a drought
    pub drought_days: i64,

    /// Trailing window for PR frequency reporting (days)
    pub frequency_window_days: i64,
}

/// Complete analysis configuration for the insights engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Expected-reps estimator parameters
    pub estimator: EstimatorConfig,
    /// Transition classification thresholds
    pub transition: TransitionThresholds,
    /// Session-verdict thresholds
    pub wisdom: WisdomThresholds,
    /// Plateau detection parameters
    pub plateau: PlateauConfig,
    /// Rolling window parameters
    pub rolling: RollingConfig,
    /// Personal-record insight parameters
    pub records: RecordConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig {
                recent_sample_size: 4,
                fatigue_penalty_per_set: 0.4,
                max_fatigue_penalty: 3.0,
            },
            transition: TransitionThresholds {
                same_weight_tolerance_pct: 1.0,
                normal_fatigue_drop_pct: 15.0,
                high_fatigue_drop_pct: 25.0,
                good_progress_slack_reps: 1.5,
                ambitious_slack_reps: 3.0,
            },
            wisdom: WisdomThresholds {
                target_reps: 10,
                top_weight_fraction: 0.95,
                low_rep_ceiling: 5,
                big_jump_min_reps: 12,
            },
            plateau: PlateauConfig {
                weight_epsilon_kg: 0.25,
                rep_band_slack: 1,
                min_stagnant_sessions: 3,
                standard_increment_kg: liftwise_core::constants::loading::STANDARD_INCREMENT_KG,
            },
            rolling: RollingConfig {
                min_workouts_required: 2,
            },
            records: RecordConfig {
                drought_days: liftwise_core::constants::scheduling::PR_DROUGHT_DAYS,
                frequency_window_days:
                    liftwise_core::constants::scheduling::PR_FREQUENCY_WINDOW_DAYS,
            },
        }
    }
}

impl AnalysisConfig {
    /// Load configuration with environment variable overrides
    ///
    /// Every override keeps its default when the variable is absent; a
    /// present but unparsable value is an error rather than a silent default.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or if the resulting
    /// configuration fails validation.
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LIFTWISE_RECENT_SAMPLE_SIZE") {
            config.estimator.recent_sample_size = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFTWISE_RECENT_SAMPLE_SIZE".into()))?;
        }

        if let Ok(val) = std::env::var("LIFTWISE_FATIGUE_PENALTY_PER_SET") {
            config.estimator.fatigue_penalty_per_set = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFTWISE_FATIGUE_PENALTY_PER_SET".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFTWISE_TARGET_REPS") {
            config.wisdom.target_reps = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFTWISE_TARGET_REPS".into()))?;
        }

        if let Ok(val) = std::env::var("LIFTWISE_TOP_WEIGHT_FRACTION") {
            config.wisdom.top_weight_fraction = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFTWISE_TOP_WEIGHT_FRACTION".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFTWISE_MIN_WORKOUTS_REQUIRED") {
            config.rolling.min_workouts_required = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFTWISE_MIN_WORKOUTS_REQUIRED".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFTWISE_DROUGHT_DAYS") {
            config.records.drought_days = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFTWISE_DROUGHT_DAYS".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        if self.estimator.recent_sample_size == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "recent_sample_size must be > 0".into(),
            ));
        }

        if self.estimator.fatigue_penalty_per_set < 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "fatigue_penalty_per_set must be >= 0".into(),
            ));
        }

        if self.transition.same_weight_tolerance_pct <= 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "same_weight_tolerance_pct must be > 0".into(),
            ));
        }

        if self.transition.high_fatigue_drop_pct < self.transition.normal_fatigue_drop_pct {
            return Err(AnalysisConfigError::ValidationFailed(
                "high_fatigue_drop_pct must be >= normal_fatigue_drop_pct".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.wisdom.top_weight_fraction)
            || self.wisdom.top_weight_fraction == 0.0
        {
            return Err(AnalysisConfigError::ValidationFailed(
                "top_weight_fraction must be in (0, 1]".into(),
            ));
        }

        if self.wisdom.target_reps == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "target_reps must be > 0".into(),
            ));
        }

        if self.plateau.weight_epsilon_kg < 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "weight_epsilon_kg must be >= 0".into(),
            ));
        }

        if self.plateau.min_stagnant_sessions == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_stagnant_sessions must be > 0".into(),
            ));
        }

        if self.records.drought_days <= 0 || self.records.frequency_window_days <= 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "record windows must be > 0 days".into(),
            ));
        }

        Ok(())
    }
}
