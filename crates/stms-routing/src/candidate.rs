//! Route candidates as supplied by an external routing provider.
//!
//! Integer fields are unsigned, so non-negativity of durations and counts is
//! a type invariant.  `distance_km` is checked by [`RouteCandidate::validate`]
//! when candidates enter through the provider adapter or the CSV loader;
//! the scorer itself never reads it.

use stms_core::{EmergencyLevel, StmsError, StmsResult, TripId};

// ── RouteCandidate ────────────────────────────────────────────────────────────

/// One alternative path between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RouteCandidate {
    pub distance_km:           f64,
    /// Provider duration without traffic.
    pub nominal_duration_secs: u32,
    /// Provider duration with current traffic.
    pub traffic_duration_secs: u32,
    pub turn_count:            u32,
    pub warning_count:         u32,
}

impl RouteCandidate {
    pub fn new(
        distance_km:           f64,
        nominal_duration_secs: u32,
        traffic_duration_secs: u32,
        turn_count:            u32,
        warning_count:         u32,
    ) -> Self {
        Self {
            distance_km,
            nominal_duration_secs,
            traffic_duration_secs,
            turn_count,
            warning_count,
        }
    }

    /// Reject a negative or non-finite distance.
    pub fn validate(&self) -> StmsResult<()> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(StmsError::invalid(format!(
                "route distance_km must be a non-negative finite number, got {}",
                self.distance_km
            )));
        }
        Ok(())
    }

    /// Relative increase of traffic duration over nominal duration, in percent.
    ///
    /// `None` for a zero nominal duration: there is no meaningful ratio.
    /// Negative when traffic is faster than nominal.
    pub fn delay_pct(&self) -> Option<f64> {
        if self.nominal_duration_secs == 0 {
            return None;
        }
        let nominal = self.nominal_duration_secs as f64;
        Some((self.traffic_duration_secs as f64 - nominal) / nominal * 100.0)
    }

    /// Traffic duration minus nominal duration (may be negative).
    #[inline]
    pub fn traffic_delay_secs(&self) -> i64 {
        self.traffic_duration_secs as i64 - self.nominal_duration_secs as i64
    }
}

// ── TripCandidates ────────────────────────────────────────────────────────────

/// All alternatives for one trip, plus the trip's emergency level.
#[derive(Clone, Debug, PartialEq)]
pub struct TripCandidates {
    pub trip:       TripId,
    pub level:      EmergencyLevel,
    pub candidates: Vec<RouteCandidate>,
}
