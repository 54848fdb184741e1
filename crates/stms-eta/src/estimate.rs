//! Distance/speed → minutes → arrival timestamp.
//!
//! ```text
//! minutes      = ceil(distance_km / speed_kmh · 60)
//! arrival_time = now + minutes
//! ```
//!
//! Minutes are rounded **up** so an ETA is never under-promised, and a
//! non-zero distance always yields at least one minute.
//!
//! # Rejected input
//!
//! | Input                                   | Outcome            |
//! |-----------------------------------------|--------------------|
//! | `speed_kmh ≤ 0`, `NaN` or `∞`           | `InvalidArgument`  |
//! | `distance_km < 0`, `NaN` or `∞`         | `InvalidArgument`  |
//! | minutes beyond `u32` / calendar range   | `InvalidArgument`  |

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use std::fmt::Display;

use stms_core::{EtaConfig, GeoPoint, StmsError, StmsResult};

use crate::format::format_minutes;

/// Travel speed assumed when the caller has no better estimate.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

// ── EtaResult ─────────────────────────────────────────────────────────────────

/// A projected arrival, valid only for the `now` it was computed from.
#[derive(Clone, Debug)]
pub struct EtaResult<Tz: TimeZone> {
    /// Whole minutes of travel, rounded up.
    pub minutes:           u32,
    /// `now + minutes`, in `now`'s time zone.
    pub arrival_time:      DateTime<Tz>,
    /// `"<minutes> min"`.
    pub formatted_minutes: String,
    /// Arrival as 24-hour `HH:MM`.
    pub formatted_arrival: String,
}

impl<Tz: TimeZone> EtaResult<Tz> {
    /// Travel time in seconds (minute resolution).
    #[inline]
    pub fn travel_secs(&self) -> u64 {
        self.minutes as u64 * 60
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Project an arrival `distance_km` away at `speed_kmh`, starting at `now`.
pub fn estimate_eta<Tz>(distance_km: f64, speed_kmh: f64, now: DateTime<Tz>) -> StmsResult<EtaResult<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let minutes = travel_minutes(distance_km, speed_kmh)?;

    let arrival_time = TimeDelta::try_minutes(minutes as i64)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| StmsError::invalid(format!("arrival {minutes} min ahead is out of range")))?;

    let formatted_arrival = arrival_time.format("%H:%M").to_string();
    log::trace!("eta: {distance_km} km @ {speed_kmh} km/h = {minutes} min, arrive {formatted_arrival}");

    Ok(EtaResult {
        minutes,
        arrival_time,
        formatted_minutes: format_minutes(minutes),
        formatted_arrival,
    })
}

/// [`estimate_eta`] at [`DEFAULT_SPEED_KMH`].
#[inline]
pub fn estimate_eta_default<Tz>(distance_km: f64, now: DateTime<Tz>) -> StmsResult<EtaResult<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    estimate_eta(distance_km, DEFAULT_SPEED_KMH, now)
}

/// [`estimate_eta`] starting at the local wall clock.
pub fn estimate_eta_from_now(distance_km: f64, speed_kmh: f64) -> StmsResult<EtaResult<Local>> {
    estimate_eta(distance_km, speed_kmh, Local::now())
}

/// [`estimate_eta`] over the Haversine distance between `from` and `to`.
pub fn estimate_eta_between<Tz>(
    from:      GeoPoint,
    to:        GeoPoint,
    speed_kmh: f64,
    now:       DateTime<Tz>,
) -> StmsResult<EtaResult<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    estimate_eta(from.distance_km(to), speed_kmh, now)
}

fn travel_minutes(distance_km: f64, speed_kmh: f64) -> StmsResult<u32> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        log::debug!("rejected eta speed {speed_kmh}");
        return Err(StmsError::invalid(format!(
            "speed_kmh must be a positive finite number, got {speed_kmh}"
        )));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        log::debug!("rejected eta distance {distance_km}");
        return Err(StmsError::invalid(format!(
            "distance_km must be a non-negative finite number, got {distance_km}"
        )));
    }

    let minutes = (distance_km / speed_kmh * 60.0).ceil();
    if minutes > u32::MAX as f64 {
        return Err(StmsError::invalid(format!(
            "{distance_km} km at {speed_kmh} km/h exceeds the representable travel time"
        )));
    }

    let minutes = minutes as u32;
    // Sub-normal quotients can round to zero for a real, non-zero distance.
    if distance_km > 0.0 && minutes == 0 {
        return Ok(1);
    }
    Ok(minutes)
}

// ── EtaEstimator ──────────────────────────────────────────────────────────────

/// An estimator with a configured default speed.
///
/// Holds no mutable state; share one instance freely across threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EtaEstimator {
    default_speed_kmh: f64,
}

impl EtaEstimator {
    /// Create an estimator, rejecting a non-positive or non-finite speed.
    pub fn new(default_speed_kmh: f64) -> StmsResult<Self> {
        if !default_speed_kmh.is_finite() || default_speed_kmh <= 0.0 {
            return Err(StmsError::invalid(format!(
                "default speed must be a positive finite number, got {default_speed_kmh}"
            )));
        }
        Ok(Self { default_speed_kmh })
    }

    pub fn from_config(config: &EtaConfig) -> StmsResult<Self> {
        Self::new(config.default_speed_kmh)
    }

    pub fn default_speed_kmh(&self) -> f64 {
        self.default_speed_kmh
    }

    /// Estimate at the configured default speed.
    pub fn estimate<Tz>(&self, distance_km: f64, now: DateTime<Tz>) -> StmsResult<EtaResult<Tz>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        estimate_eta(distance_km, self.default_speed_kmh, now)
    }

    /// Estimate between two points at the configured default speed.
    pub fn estimate_between<Tz>(
        &self,
        from: GeoPoint,
        to:   GeoPoint,
        now:  DateTime<Tz>,
    ) -> StmsResult<EtaResult<Tz>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        estimate_eta_between(from, to, self.default_speed_kmh, now)
    }
}

impl Default for EtaEstimator {
    fn default() -> Self {
        Self { default_speed_kmh: DEFAULT_SPEED_KMH }
    }
}
