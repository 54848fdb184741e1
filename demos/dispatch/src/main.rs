//! dispatch — end-to-end demo of the rust_stms routing core.
//!
//! Ranks alternative routes for a handful of emergency trips and suggests
//! the closest responders for an incident.
//!
//! ```text
//! dispatch [candidates.csv] [--config stms.json]
//! ```
//!
//! Without arguments the embedded candidate CSV and default weights are used.

mod facilities;

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;

use stms_core::{GeoPoint, StmsConfig};
use stms_dispatch::{Dispatcher, FacilityKind};
use stms_eta::{EtaEstimator, format_distance_km, format_duration_secs};
use stms_routing::{
    HeuristicScorer, TripCandidates, load_candidates_csv, load_candidates_reader, rank_trips,
};

use facilities::build_roster;

// ── Constants ─────────────────────────────────────────────────────────────────

const SUGGESTION_LIMIT: usize = 3;

// Three trips; trip 1 is a cardiac case, so turns cost points.
const CANDIDATES_CSV: &str = "\
trip_id,emergency_level,distance_km,nominal_duration_secs,traffic_duration_secs,turn_count,warning_count\n\
1,high,10.0,600,960,5,0\n\
1,high,11.8,680,720,3,0\n\
1,high,9.1,560,610,14,1\n\
2,medium,4.2,420,430,6,0\n\
2,medium,3.9,400,640,4,0\n\
3,low,22.5,1500,1740,12,3\n\
3,low,25.0,1620,1650,9,0\n\
";

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    candidates: Option<PathBuf>,
    config:     Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { candidates: None, config: None };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => {
                if args.candidates.is_some() {
                    bail!("only one candidates CSV may be given");
                }
                args.candidates = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = parse_args()?;

    println!("=== dispatch — rust_stms routing core ===");

    // 1. Configuration.
    let config = match &args.config {
        Some(path) => StmsConfig::load_json(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StmsConfig::default(),
    };
    let scorer    = HeuristicScorer::from_config(&config.scoring)?;
    let estimator = EtaEstimator::from_config(&config.eta)?;
    println!("Default speed: {} km/h", estimator.default_speed_kmh());
    println!();

    // 2. Candidates.
    let trips: Vec<TripCandidates> = match &args.candidates {
        Some(path) => load_candidates_csv(path)
            .with_context(|| format!("loading candidates {}", path.display()))?,
        None => load_candidates_reader(Cursor::new(CANDIDATES_CSV))?,
    };

    // 3. Rank and print.
    let now = Local::now();
    for ranking in rank_trips(&trips, &scorer) {
        println!("{} ({} priority)", ranking.trip, ranking.level);
        println!(
            "  {:<4} {:<6} {:<10} {:<10} {:<12} {:<6} {:<8}",
            "#", "Score", "Distance", "Traffic", "Congestion", "Turns", "ETA"
        );
        for route in &ranking.routes {
            let c = &route.candidate;
            let breakdown = scorer.breakdown(c, ranking.level);
            let eta = estimator.estimate(c.distance_km, now)?;
            println!(
                "  {:<4} {:<6} {:<10} {:<10} {:<12} {:<6} {:<8}",
                route.index,
                route.score,
                format_distance_km(c.distance_km),
                format_duration_secs(u64::from(c.traffic_duration_secs)),
                breakdown.traffic_level.map_or("n/a", |level| level.as_str()),
                c.turn_count,
                eta.formatted_arrival,
            );
        }
        println!();
    }

    // 4. Nearest responders for an incident at the first trip's origin.
    let incident = GeoPoint::new(12.9784, 77.6408);
    let dispatcher = Dispatcher::new(build_roster()?, estimator);
    println!("Incident at {incident}");
    for kind in [FacilityKind::Ambulance, FacilityKind::Hospital, FacilityKind::PoliceUnit] {
        let suggestions = dispatcher.suggest(incident, kind, SUGGESTION_LIMIT, now)?;
        println!("  {kind}:");
        for s in suggestions {
            let facility = dispatcher.index.facility(s.facility)?;
            println!(
                "    {:<24} {:>8}  {:>7}  arrive {}",
                facility.name,
                format_distance_km(s.distance_km),
                s.eta.formatted_minutes,
                s.eta.formatted_arrival,
            );
        }
    }

    Ok(())
}
