//! Ordering alternative routes for a trip.
//!
//! Ranking order:
//!
//! 1. higher [`RouteScore`] first
//! 2. on equal score, shorter `traffic_duration_secs` first
//! 3. on equal score and duration, earlier position in the input slice
//!
//! The last key makes the order total, so the result never depends on the
//! sort algorithm or on the `parallel` feature.

use std::cmp::Ordering;

use stms_core::{EmergencyLevel, TripId};

use crate::{RouteCandidate, RouteScore, RouteScorer, TripCandidates};

/// One row of a ranking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankedRoute {
    /// Position of the candidate in the caller's input slice.
    pub index:     usize,
    pub score:     RouteScore,
    pub candidate: RouteCandidate,
}

/// Ranked alternatives for one trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRanking {
    pub trip:   TripId,
    pub level:  EmergencyLevel,
    pub routes: Vec<RankedRoute>,
}

impl TripRanking {
    /// The winning route, if the trip had any candidates.
    pub fn best(&self) -> Option<&RankedRoute> {
        self.routes.first()
    }
}

fn rank_order(a: &RankedRoute, b: &RankedRoute) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.candidate.traffic_duration_secs.cmp(&b.candidate.traffic_duration_secs))
        .then(a.index.cmp(&b.index))
}

/// Score every candidate and sort best-first.
pub fn rank_routes<S>(candidates: &[RouteCandidate], level: EmergencyLevel, scorer: &S) -> Vec<RankedRoute>
where
    S: RouteScorer + ?Sized,
{
    let mut ranked: Vec<RankedRoute> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| RankedRoute {
            index,
            score: scorer.score(candidate, level),
            candidate: *candidate,
        })
        .collect();

    ranked.sort_unstable_by(rank_order);

    if let Some(best) = ranked.first() {
        log::debug!(
            "ranked {} candidates ({level}): best #{} score {} traffic {} s",
            ranked.len(),
            best.index,
            best.score,
            best.candidate.traffic_duration_secs
        );
    }
    ranked
}

/// The top-ranked candidate, or `None` for an empty slice.
pub fn best_route<S>(candidates: &[RouteCandidate], level: EmergencyLevel, scorer: &S) -> Option<RankedRoute>
where
    S: RouteScorer + ?Sized,
{
    rank_routes(candidates, level, scorer).into_iter().next()
}

fn rank_trip<S>(trip: &TripCandidates, scorer: &S) -> TripRanking
where
    S: RouteScorer + ?Sized,
{
    TripRanking {
        trip:   trip.trip,
        level:  trip.level,
        routes: rank_routes(&trip.candidates, trip.level, scorer),
    }
}

/// Rank many independent trips, each at its own emergency level.
///
/// Output order matches input order.
pub fn rank_trips<S>(trips: &[TripCandidates], scorer: &S) -> Vec<TripRanking>
where
    S: RouteScorer + ?Sized,
{
    #[cfg(not(feature = "parallel"))]
    {
        trips.iter().map(|trip| rank_trip(trip, scorer)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        trips.par_iter().map(|trip| rank_trip(trip, scorer)).collect()
    }
}
