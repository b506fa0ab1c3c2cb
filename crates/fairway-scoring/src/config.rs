use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Points awarded for a net par.
pub const STABLEFORD_PAR_POINTS: i32 = 2;
/// Highest Stableford score a single hole can earn.
pub const STABLEFORD_MAX_POINTS: i32 = 6;
/// Number of most recent team rounds considered for momentum.
pub const MOMENTUM_WINDOW: usize = 3;
/// Average swing (strokes) between halves needed to call a trend.
pub const MOMENTUM_THRESHOLD: f64 = 2.0;
/// Number of members listed as a team's best performers.
pub const BEST_PERFORMER_COUNT: usize = 3;

/// Stableford point rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StablefordRules {
    pub par_points: i32,
    pub min_points: i32,
    pub max_points: i32,
}

impl Default for StablefordRules {
    fn default() -> Self {
        Self {
            par_points: STABLEFORD_PAR_POINTS,
            min_points: 0,
            max_points: STABLEFORD_MAX_POINTS,
        }
    }
}

/// Team statistics tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatsRules {
    pub momentum_window: usize,
    pub momentum_threshold: f64,
    pub best_performer_count: usize,
}

impl Default for TeamStatsRules {
    fn default() -> Self {
        Self {
            momentum_window: MOMENTUM_WINDOW,
            momentum_threshold: MOMENTUM_THRESHOLD,
            best_performer_count: BEST_PERFORMER_COUNT,
        }
    }
}

/// Skins game rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinsRules {
    /// Tied holes carry their skin to the next hole instead of voiding it.
    pub carry_over: bool,
}

impl Default for SkinsRules {
    fn default() -> Self {
        Self { carry_over: true }
    }
}

/// Top-level scoring configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub stableford: StablefordRules,
    pub team: TeamStatsRules,
    pub skins: SkinsRules,
}

impl ScoringConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("FAIRWAY_SCORING_CONFIG")
            .unwrap_or_else(|_| "config/scoring.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                ScoringConfig::default()
            }),
            Err(_) => {
                tracing::debug!("No scoring config at {path}, using defaults");
                ScoringConfig::default()
            },
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ScoringError> {
        let cfg: ScoringConfig =
            toml::from_str(content).map_err(|e| ScoringError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.stableford.min_points > self.stableford.max_points {
            return Err(ScoringError::Config(format!(
                "stableford.min_points ({}) exceeds max_points ({})",
                self.stableford.min_points, self.stableford.max_points
            )));
        }
        if self.team.momentum_window < 2 {
            return Err(ScoringError::Config(
                "team.momentum_window must be at least 2".to_string(),
            ));
        }
        if !self.team.momentum_threshold.is_finite() || self.team.momentum_threshold < 0.0 {
            return Err(ScoringError::Config(
                "team.momentum_threshold must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
