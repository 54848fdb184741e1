//! CSV loader for batches of route candidates.
//!
//! # CSV format
//!
//! One row per candidate.  All rows of a trip must share the same
//! `emergency_level`.
//!
//! ```csv
//! trip_id,emergency_level,distance_km,nominal_duration_secs,traffic_duration_secs,turn_count,warning_count
//! 1,high,10.0,600,960,5,0
//! 1,high,11.5,660,700,9,1
//! 2,medium,4.2,420,430,3,0
//! ```
//!
//! Trips are returned in order of first appearance; candidates keep their
//! row order within a trip, which is what `RankedRoute::index` refers to.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use stms_core::{EmergencyLevel, TripId};

use crate::{RouteCandidate, RoutingError, RoutingResult, TripCandidates};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CandidateRecord {
    trip_id:               u64,
    emergency_level:       String,
    distance_km:           f64,
    nominal_duration_secs: u32,
    traffic_duration_secs: u32,
    turn_count:            u32,
    warning_count:         u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load grouped trip candidates from a CSV file.
pub fn load_candidates_csv(path: &Path) -> RoutingResult<Vec<TripCandidates>> {
    let file = std::fs::File::open(path).map_err(RoutingError::Io)?;
    load_candidates_reader(file)
}

/// Like [`load_candidates_csv`] but accepts any `Read` source.
pub fn load_candidates_reader<R: Read>(reader: R) -> RoutingResult<Vec<TripCandidates>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut trips: Vec<TripCandidates> = Vec::new();
    let mut slot_of: HashMap<u64, usize> = HashMap::new();

    for (row_no, result) in csv_reader.deserialize::<CandidateRecord>().enumerate() {
        let row = result.map_err(|e| RoutingError::Parse(e.to_string()))?;
        let level: EmergencyLevel = row.emergency_level.parse()?;

        let candidate = RouteCandidate {
            distance_km:           row.distance_km,
            nominal_duration_secs: row.nominal_duration_secs,
            traffic_duration_secs: row.traffic_duration_secs,
            turn_count:            row.turn_count,
            warning_count:         row.warning_count,
        };
        candidate.validate()?;

        let slot = *slot_of.entry(row.trip_id).or_insert_with(|| {
            trips.push(TripCandidates {
                trip:       TripId(row.trip_id),
                level,
                candidates: Vec::new(),
            });
            trips.len() - 1
        });

        let trip = &mut trips[slot];
        if trip.level != level {
            return Err(RoutingError::Parse(format!(
                "row {}: trip {} has emergency level {} but an earlier row says {}",
                row_no + 1,
                row.trip_id,
                level,
                trip.level
            )));
        }
        trip.candidates.push(candidate);
    }

    log::debug!(
        "loaded {} trips / {} candidates",
        trips.len(),
        trips.iter().map(|t| t.candidates.len()).sum::<usize>()
    );
    Ok(trips)
}
