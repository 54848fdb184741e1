//! Adapter for directions-API payloads.
//!
//! Accepts the JSON shape returned by Google-style directions services:
//!
//! ```json
//! {
//!   "status": "OK",
//!   "routes": [{
//!     "summary":  "MG Road",
//!     "warnings": ["Walking directions are in beta."],
//!     "legs": [{
//!       "distance":            { "value": 5200 },
//!       "duration":            { "value": 600 },
//!       "duration_in_traffic": { "value": 840 },
//!       "steps": [{ "maneuver": "turn-left" }, { }]
//!     }]
//!   }]
//! }
//! ```
//!
//! Multi-leg routes are summed.  `duration_in_traffic` falls back to
//! `duration` when absent.  A step counts as a turn when its `maneuver`
//! contains any of [`TURN_MANEUVERS`]; steps without a maneuver are
//! straight-ahead continuations.
//!
//! The adapter performs no network I/O: the caller fetches the payload.

use serde::Deserialize;

use crate::{RouteCandidate, RoutingError, RoutingResult};

/// Maneuver substrings that count as a turn (`uturn-left` matches `turn`).
pub const TURN_MANEUVERS: [&str; 6] = ["turn", "ramp", "fork", "roundabout", "keep", "merge"];

// ── Payload records ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectionsResponse {
    status:        Option<String>,
    error_message: Option<String>,
    #[serde(default)]
    routes:        Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    summary:  String,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    legs:     Vec<DirectionsLeg>,
}

#[derive(Deserialize)]
struct DirectionsLeg {
    distance:            Quantity,
    duration:            Quantity,
    duration_in_traffic: Option<Quantity>,
    #[serde(default)]
    steps:               Vec<DirectionsStep>,
}

#[derive(Deserialize)]
struct DirectionsStep {
    maneuver: Option<String>,
}

#[derive(Deserialize)]
struct Quantity {
    value: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Convert a directions payload into one [`RouteCandidate`] per route.
///
/// `ZERO_RESULTS` yields an empty list; any other non-`OK` status is a
/// [`RoutingError::Provider`].  Routes without legs are skipped.
pub fn parse_directions_json(json: &str) -> RoutingResult<Vec<RouteCandidate>> {
    let response: DirectionsResponse =
        serde_json::from_str(json).map_err(|e| RoutingError::Parse(e.to_string()))?;

    match response.status.as_deref() {
        None | Some("OK") => {}
        Some("ZERO_RESULTS") => return Ok(Vec::new()),
        Some(status) => {
            let detail = response.error_message.unwrap_or_default();
            return Err(RoutingError::Provider(format!("{status} {detail}").trim_end().to_owned()));
        }
    }

    let mut candidates = Vec::with_capacity(response.routes.len());
    for (i, route) in response.routes.iter().enumerate() {
        if route.legs.is_empty() {
            log::warn!("directions route #{i} ({:?}) has no legs; skipped", route.summary);
            continue;
        }
        let candidate = convert_route(route)?;
        candidate.validate()?;
        candidates.push(candidate);
    }
    Ok(candidates)
}

/// `true` if a provider maneuver string denotes a turn.
pub fn is_turn_maneuver(maneuver: &str) -> bool {
    let m = maneuver.to_ascii_lowercase();
    TURN_MANEUVERS.iter().any(|kw| m.contains(kw))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn convert_route(route: &DirectionsRoute) -> RoutingResult<RouteCandidate> {
    let mut distance_m   = 0.0;
    let mut nominal_secs = 0.0;
    let mut traffic_secs = 0.0;
    let mut turns: usize = 0;

    for leg in &route.legs {
        distance_m   += leg.distance.value;
        nominal_secs += leg.duration.value;
        traffic_secs += leg.duration_in_traffic.as_ref().unwrap_or(&leg.duration).value;
        turns += leg
            .steps
            .iter()
            .filter(|s| s.maneuver.as_deref().is_some_and(is_turn_maneuver))
            .count();
    }

    Ok(RouteCandidate {
        distance_km:           distance_m / 1_000.0,
        nominal_duration_secs: secs_field("duration", nominal_secs)?,
        traffic_duration_secs: secs_field("duration_in_traffic", traffic_secs)?,
        turn_count:            count_field("turn", turns)?,
        warning_count:         count_field("warning", route.warnings.len())?,
    })
}

fn secs_field(name: &str, secs: f64) -> RoutingResult<u32> {
    if !secs.is_finite() || secs < 0.0 || secs.round() > u32::MAX as f64 {
        return Err(RoutingError::Parse(format!("{name} of {secs} s is out of range")));
    }
    Ok(secs.round() as u32)
}

fn count_field(name: &str, n: usize) -> RoutingResult<u32> {
    u32::try_from(n).map_err(|_| RoutingError::Parse(format!("{name} count {n} is out of range")))
}
