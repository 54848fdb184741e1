//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Distances are
//! computed with the Haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`].
//!
//! # Validation
//!
//! [`GeoPoint::new`] and [`distance_km`] do **not** check the
//! `-90 ≤ lat ≤ 90`, `-180 ≤ lng ≤ 180` invariant.  Out-of-range input yields
//! a mathematically defined but physically meaningless distance, and
//! `NaN`/`∞` propagate through the formula unchanged.  Callers that receive
//! coordinates from untrusted sources should construct points with
//! [`GeoPoint::try_new`].

use std::fmt;

use crate::{StmsError, StmsResult};

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a point, rejecting coordinates outside the WGS-84 range.
    pub fn try_new(lat: f64, lng: f64) -> StmsResult<Self> {
        let p = Self { lat, lng };
        if !p.is_valid() {
            log::debug!("rejected coordinate {p}");
            return Err(StmsError::invalid(format!(
                "coordinate {p} outside lat [-90, 90] / lng [-180, 180]"
            )));
        }
        Ok(p)
    }

    /// `true` if both components are finite and within range.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
        // Rounding can push `a` past 1 for near-antipodal points.  A plain
        // comparison (not `f64::min`) so NaN still propagates.
        let a = if a > 1.0 { 1.0 } else { a };

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Haversine great-circle distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        self.distance_km(other) * 1_000.0
    }

    /// Approximate bounding-box check — much cheaper than `distance_km` for
    /// quick rejection before an exact distance is needed.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lng - center.lng).abs() <= half_deg
    }
}

/// Haversine distance between `p1` and `p2` in kilometres.
///
/// Symmetric, zero for identical points, at most `EARTH_RADIUS_KM · π`
/// (≈ 20 015 km) for antipodal points.
#[inline]
pub fn distance_km(p1: GeoPoint, p2: GeoPoint) -> f64 {
    p1.distance_km(p2)
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
