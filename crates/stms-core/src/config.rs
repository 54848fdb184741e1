//! Tunable parameters for the ETA estimator and route scorer.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid config
//! and reproduces the built-in behaviour exactly:
//!
//! ```json
//! {
//!   "eta":     { "default_speed_kmh": 40.0 },
//!   "scoring": {
//!     "warning_penalty":   5,
//!     "turn_penalty_high": 2,
//!     "heavy":    { "above_pct": 50.0, "penalty": 30 },
//!     "moderate": { "above_pct": 20.0, "penalty": 15 },
//!     "light":    { "above_pct": 10.0, "penalty": 5 }
//!   }
//! }
//! ```
//!
//! Typically loaded once by the application and handed to
//! `EtaEstimator::from_config` / `HeuristicScorer::from_config`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{StmsError, StmsResult};

// ── EtaConfig ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EtaConfig {
    /// Assumed travel speed when the caller does not supply one.
    pub default_speed_kmh: f64,
}

impl Default for EtaConfig {
    fn default() -> Self {
        Self { default_speed_kmh: 40.0 }
    }
}

// ── ScoringConfig ─────────────────────────────────────────────────────────────

/// One traffic-delay band: a candidate whose delay percentage is strictly
/// greater than `above_pct` loses `penalty` points.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelayBand {
    pub above_pct: f64,
    pub penalty:   u32,
}

/// Route-scorer weights.  Bands are checked heavy → moderate → light and the
/// first match wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points lost per provider warning.
    pub warning_penalty:   u32,
    /// Points lost per turn, applied only for high-priority emergencies.
    pub turn_penalty_high: u32,
    pub heavy:             DelayBand,
    pub moderate:          DelayBand,
    pub light:             DelayBand,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            warning_penalty:   5,
            turn_penalty_high: 2,
            heavy:    DelayBand { above_pct: 50.0, penalty: 30 },
            moderate: DelayBand { above_pct: 20.0, penalty: 15 },
            light:    DelayBand { above_pct: 10.0, penalty: 5 },
        }
    }
}

impl ScoringConfig {
    /// Band thresholds must be finite, non-negative and strictly descending.
    pub fn validate(&self) -> StmsResult<()> {
        for (name, band) in [("heavy", self.heavy), ("moderate", self.moderate), ("light", self.light)] {
            if !band.above_pct.is_finite() || band.above_pct < 0.0 {
                return Err(StmsError::Config(format!(
                    "scoring.{name}.above_pct must be a non-negative finite number, got {}",
                    band.above_pct
                )));
            }
        }
        if !(self.heavy.above_pct > self.moderate.above_pct
            && self.moderate.above_pct > self.light.above_pct)
        {
            return Err(StmsError::Config(format!(
                "delay bands must be strictly descending (heavy > moderate > light), got {} / {} / {}",
                self.heavy.above_pct, self.moderate.above_pct, self.light.above_pct
            )));
        }
        Ok(())
    }
}

// ── StmsConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StmsConfig {
    pub eta:     EtaConfig,
    pub scoring: ScoringConfig,
}

impl StmsConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> StmsResult<Self> {
        let config: StmsConfig = serde_json::from_str(json)
            .map_err(|e| StmsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load_json(path: &Path) -> StmsResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> StmsResult<()> {
        let speed = self.eta.default_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(StmsError::Config(format!(
                "eta.default_speed_kmh must be a positive finite number, got {speed}"
            )));
        }

        self.scoring.validate()
    }
}
