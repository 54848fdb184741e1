//! Congestion bands derived from a candidate's traffic delay percentage.
//!
//! | Level      | Delay (default thresholds) | Default penalty |
//! |------------|----------------------------|-----------------|
//! | `Heavy`    | `> 50 %`                   | 30              |
//! | `Moderate` | `(20 %, 50 %]`             | 15              |
//! | `Light`    | `(10 %, 20 %]`             | 5               |
//! | `Clear`    | `≤ 10 %`                   | 0               |
//!
//! Bands are exclusive and checked in descending order; a candidate falls into
//! exactly one band, so penalties never stack.

use stms_core::ScoringConfig;

use crate::RouteCandidate;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum TrafficLevel {
    Clear,
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Classify a delay percentage against `config`'s band thresholds.
    ///
    /// A `NaN` percentage compares false against every threshold and lands
    /// in `Clear`.
    pub fn from_delay_pct(delay_pct: f64, config: &ScoringConfig) -> Self {
        if delay_pct > config.heavy.above_pct {
            TrafficLevel::Heavy
        } else if delay_pct > config.moderate.above_pct {
            TrafficLevel::Moderate
        } else if delay_pct > config.light.above_pct {
            TrafficLevel::Light
        } else {
            TrafficLevel::Clear
        }
    }

    /// Band of `route`, or `None` when its nominal duration is zero.
    pub fn of_route(route: &RouteCandidate, config: &ScoringConfig) -> Option<Self> {
        route.delay_pct().map(|pct| Self::from_delay_pct(pct, config))
    }

    /// Score points this band costs under `config`.
    pub fn penalty(self, config: &ScoringConfig) -> u32 {
        match self {
            TrafficLevel::Heavy    => config.heavy.penalty,
            TrafficLevel::Moderate => config.moderate.penalty,
            TrafficLevel::Light    => config.light.penalty,
            TrafficLevel::Clear    => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Clear    => "clear",
            TrafficLevel::Light    => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy    => "heavy",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
