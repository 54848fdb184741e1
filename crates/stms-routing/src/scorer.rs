//! Route-quality scoring.
//!
//! # Heuristic
//!
//! Every candidate starts at 100 and loses points:
//!
//! 1. `warning_count × warning_penalty` (default 5 per warning)
//! 2. one congestion-band penalty from [`TrafficLevel`] (skipped when the
//!    nominal duration is zero)
//! 3. `turn_count × turn_penalty_high` (default 2), only for
//!    [`EmergencyLevel::High`]
//!
//! and the total is clamped to `[0, 100]`.  Arithmetic runs in saturating
//! `i64`, so very large counts bottom out at 0 instead of wrapping.
//!
//! # Pluggability
//!
//! Ranking goes through the [`RouteScorer`] trait, so applications can supply
//! a different policy (distance-weighted, learned, …) without touching
//! [`rank_routes`][crate::rank_routes].

use std::fmt;

use stms_core::{EmergencyLevel, ScoringConfig, StmsResult};

use crate::{RouteCandidate, TrafficLevel};

// ── RouteScore ────────────────────────────────────────────────────────────────

/// A route-quality score in `[0, 100]`; higher is better.
///
/// Serialises as a bare integer.  Not deserialisable: scores only come from
/// a scorer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
pub struct RouteScore(u8);

impl RouteScore {
    pub const MIN: RouteScore = RouteScore(0);
    pub const MAX: RouteScore = RouteScore(100);

    /// Clamp an arbitrary signed total into `[0, 100]`.
    #[inline]
    pub fn clamped(raw: i64) -> Self {
        RouteScore(raw.clamp(0, 100) as u8)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RouteScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RouteScore> for u8 {
    fn from(score: RouteScore) -> u8 {
        score.0
    }
}

// ── ScoreBreakdown ────────────────────────────────────────────────────────────

/// Individual penalties behind a [`RouteScore`], for "why this route" displays.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScoreBreakdown {
    pub warning_penalty: i64,
    pub delay_penalty:   i64,
    pub turn_penalty:    i64,
    /// `None` when the candidate's nominal duration is zero.
    pub traffic_level:   Option<TrafficLevel>,
    pub score:           RouteScore,
}

// ── RouteScorer trait ─────────────────────────────────────────────────────────

/// Pluggable route-quality policy.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one scorer can be shared across
/// Rayon workers by `rank_trips` (feature `parallel`).
pub trait RouteScorer: Send + Sync {
    /// Score `route` for an emergency of the given `level`.
    ///
    /// Must be deterministic: identical inputs always yield the same score.
    fn score(&self, route: &RouteCandidate, level: EmergencyLevel) -> RouteScore;
}

// ── HeuristicScorer ───────────────────────────────────────────────────────────

/// The default penalty-based scorer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeuristicScorer {
    config: ScoringConfig,
}

impl HeuristicScorer {
    /// Build a scorer from validated weights.
    pub fn new(config: ScoringConfig) -> StmsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_config(config: &ScoringConfig) -> StmsResult<Self> {
        Self::new(config.clone())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `route` and report each penalty separately.
    pub fn breakdown(&self, route: &RouteCandidate, level: EmergencyLevel) -> ScoreBreakdown {
        let cfg = &self.config;

        let warning_penalty =
            i64::from(route.warning_count).saturating_mul(i64::from(cfg.warning_penalty));

        let traffic_level = TrafficLevel::of_route(route, cfg);
        let delay_penalty = traffic_level.map_or(0, |band| i64::from(band.penalty(cfg)));

        let turn_penalty = if level.penalises_turns() {
            i64::from(route.turn_count).saturating_mul(i64::from(cfg.turn_penalty_high))
        } else {
            0
        };

        let raw = 100i64
            .saturating_sub(warning_penalty)
            .saturating_sub(delay_penalty)
            .saturating_sub(turn_penalty);

        ScoreBreakdown {
            warning_penalty,
            delay_penalty,
            turn_penalty,
            traffic_level,
            score: RouteScore::clamped(raw),
        }
    }
}

impl RouteScorer for HeuristicScorer {
    fn score(&self, route: &RouteCandidate, level: EmergencyLevel) -> RouteScore {
        self.breakdown(route, level).score
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Score `route` with the default weights.
///
/// Pass `EmergencyLevel::default()` (medium) when the caller has no
/// priority signal.
pub fn score_route(route: &RouteCandidate, level: EmergencyLevel) -> RouteScore {
    HeuristicScorer::default().score(route, level)
}

/// [`score_route`] for string-typed callers (REST query parameters, CSV).
///
/// An unrecognised level is rejected with `InvalidArgument` rather than
/// defaulted.
pub fn score_route_str(route: &RouteCandidate, level: &str) -> StmsResult<RouteScore> {
    let level: EmergencyLevel = level.parse()?;
    Ok(score_route(route, level))
}
