//! ETA-ordered dispatch suggestions for an incident.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use stms_core::{FacilityId, GeoPoint, StmsError};
use stms_eta::{EtaEstimator, EtaResult};

use crate::{DispatchResult, FacilityIndex, FacilityKind};

/// One facility that could respond, with its straight-line distance and ETA.
#[derive(Clone, Debug)]
pub struct DispatchSuggestion<Tz: TimeZone> {
    pub facility:    FacilityId,
    pub distance_km: f64,
    pub eta:         EtaResult<Tz>,
}

/// Combines a [`FacilityIndex`] with an [`EtaEstimator`].
///
/// ETAs are straight-line estimates at the estimator's default speed; route
/// quality for the chosen unit is a separate concern (`stms-routing`).
pub struct Dispatcher {
    pub index:     FacilityIndex,
    pub estimator: EtaEstimator,
}

impl Dispatcher {
    pub fn new(index: FacilityIndex, estimator: EtaEstimator) -> Self {
        Self { index, estimator }
    }

    /// Up to `limit` facilities of `kind` ordered by ETA, then distance, then id.
    ///
    /// `incident` must be a valid WGS-84 coordinate.
    pub fn suggest<Tz>(
        &self,
        incident: GeoPoint,
        kind:     FacilityKind,
        limit:    usize,
        now:      DateTime<Tz>,
    ) -> DispatchResult<Vec<DispatchSuggestion<Tz>>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        check_incident(incident)?;

        let mut out = Vec::with_capacity(limit.min(self.index.count(kind)));
        for (facility, distance_km) in self.index.k_nearest(incident, kind, limit) {
            let eta = self.estimator.estimate(distance_km, now.clone())?;
            out.push(DispatchSuggestion { facility, distance_km, eta });
        }
        out.sort_by(|a, b| {
            a.eta.minutes
                .cmp(&b.eta.minutes)
                .then(a.distance_km.total_cmp(&b.distance_km))
                .then(a.facility.cmp(&b.facility))
        });

        if let Some(first) = out.first() {
            log::debug!(
                "dispatch {kind} to {incident}: {} in {} ({} candidates)",
                first.facility,
                first.eta.formatted_minutes,
                out.len()
            );
        } else if self.index.count(kind) == 0 {
            log::warn!("dispatch {kind} to {incident}: no facility registered");
        }
        Ok(out)
    }

    /// ETA from a specific facility to `incident`.
    pub fn eta_from<Tz>(
        &self,
        facility: FacilityId,
        incident: GeoPoint,
        now:      DateTime<Tz>,
    ) -> DispatchResult<DispatchSuggestion<Tz>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        check_incident(incident)?;
        let location = self.index.facility(facility)?.location;
        let distance_km = location.distance_km(incident);
        let eta = self.estimator.estimate(distance_km, now)?;
        Ok(DispatchSuggestion { facility, distance_km, eta })
    }
}

fn check_incident(incident: GeoPoint) -> Result<(), StmsError> {
    GeoPoint::try_new(incident.lat, incident.lng).map(|_| ())
}
