//! Unit tests for stms-routing.
//!
//! Candidates are hand-built; no provider or network is involved.

#[cfg(test)]
mod helpers {
    use crate::RouteCandidate;

    /// 10 km, 600 s nominal, 600 s in traffic, 5 turns, no warnings.
    pub fn base() -> RouteCandidate {
        RouteCandidate::new(10.0, 600, 600, 5, 0)
    }

    pub fn with_traffic(traffic_secs: u32) -> RouteCandidate {
        RouteCandidate { traffic_duration_secs: traffic_secs, ..base() }
    }
}

// ── Candidate & congestion ────────────────────────────────────────────────────

#[cfg(test)]
mod candidate {
    use stms_core::ScoringConfig;

    use super::helpers::{base, with_traffic};
    use crate::{RouteCandidate, TrafficLevel};

    #[test]
    fn delay_pct() {
        assert_eq!(base().delay_pct(), Some(0.0));
        assert_eq!(with_traffic(960).delay_pct(), Some(60.0));
        assert_eq!(with_traffic(300).delay_pct(), Some(-50.0));
        assert_eq!(with_traffic(960).traffic_delay_secs(), 360);
    }

    #[test]
    fn zero_nominal_has_no_delay_ratio() {
        let r = RouteCandidate::new(0.0, 0, 120, 0, 0);
        assert_eq!(r.delay_pct(), None);
        assert_eq!(TrafficLevel::of_route(&r, &ScoringConfig::default()), None);
    }

    #[test]
    fn validate_distance() {
        assert!(base().validate().is_ok());
        for d in [-1.0, f64::NAN, f64::INFINITY] {
            let r = RouteCandidate { distance_km: d, ..base() };
            assert!(r.validate().unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn bands_are_exclusive_at_boundaries() {
        let cfg = ScoringConfig::default();
        let level = |t| TrafficLevel::of_route(&with_traffic(t), &cfg).unwrap();
        assert_eq!(level(600), TrafficLevel::Clear);    //  0 %
        assert_eq!(level(660), TrafficLevel::Clear);    // 10 %
        assert_eq!(level(661), TrafficLevel::Light);    // 10.17 %
        assert_eq!(level(720), TrafficLevel::Light);    // 20 %
        assert_eq!(level(721), TrafficLevel::Moderate);
        assert_eq!(level(900), TrafficLevel::Moderate); // 50 %
        assert_eq!(level(901), TrafficLevel::Heavy);
        assert_eq!(level(6_000), TrafficLevel::Heavy);
    }

    #[test]
    fn band_penalties() {
        let cfg = ScoringConfig::default();
        assert_eq!(TrafficLevel::Heavy.penalty(&cfg), 30);
        assert_eq!(TrafficLevel::Moderate.penalty(&cfg), 15);
        assert_eq!(TrafficLevel::Light.penalty(&cfg), 5);
        assert_eq!(TrafficLevel::Clear.penalty(&cfg), 0);
        assert_eq!(TrafficLevel::Moderate.to_string(), "moderate");
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use stms_core::{DelayBand, EmergencyLevel, ScoringConfig};

    use super::helpers::{base, with_traffic};
    use crate::{
        HeuristicScorer, RouteCandidate, RouteScore, RouteScorer, TrafficLevel, score_route,
        score_route_str,
    };

    fn score(r: &RouteCandidate, level: EmergencyLevel) -> u8 {
        score_route(r, level).value()
    }

    #[test]
    fn scenario_free_flow_medium() {
        assert_eq!(score(&base(), EmergencyLevel::Medium), 100);
    }

    #[test]
    fn scenario_heavy_traffic() {
        // delay 60 % → heavy band → -30
        assert_eq!(score(&with_traffic(960), EmergencyLevel::Medium), 70);
    }

    #[test]
    fn scenario_heavy_traffic_high_priority() {
        // -30 delay, -10 for five turns
        assert_eq!(score(&with_traffic(960), EmergencyLevel::High), 60);
    }

    #[test]
    fn scenario_warnings() {
        let r = RouteCandidate { warning_count: 3, ..base() };
        assert_eq!(score(&r, EmergencyLevel::Medium), 85);
    }

    #[test]
    fn default_level_is_medium() {
        let r = with_traffic(960);
        assert_eq!(score_route(&r, EmergencyLevel::default()), score_route(&r, EmergencyLevel::Medium));
    }

    #[test]
    fn turns_ignored_below_high() {
        let r = RouteCandidate { turn_count: 40, ..base() };
        assert_eq!(score(&r, EmergencyLevel::Low), 100);
        assert_eq!(score(&r, EmergencyLevel::Medium), 100);
        assert_eq!(score(&r, EmergencyLevel::High), 20);
    }

    #[test]
    fn band_penalties_do_not_stack() {
        assert_eq!(score(&with_traffic(661), EmergencyLevel::Medium), 95);
        assert_eq!(score(&with_traffic(721), EmergencyLevel::Medium), 85);
        assert_eq!(score(&with_traffic(900), EmergencyLevel::Medium), 85);
        assert_eq!(score(&with_traffic(901), EmergencyLevel::Medium), 70);
    }

    #[test]
    fn zero_nominal_skips_delay_penalty() {
        let r = RouteCandidate::new(0.0, 0, 5_000, 0, 0);
        assert_eq!(score(&r, EmergencyLevel::High), 100);
    }

    #[test]
    fn faster_than_nominal_is_not_rewarded() {
        assert_eq!(score(&with_traffic(100), EmergencyLevel::Medium), 100);
    }

    #[test]
    fn clamps_at_zero_without_overflow() {
        let r = RouteCandidate::new(1.0, 1, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(score_route(&r, EmergencyLevel::High), RouteScore::MIN);

        let heavy = ScoringConfig { warning_penalty: u32::MAX, turn_penalty_high: u32::MAX, ..Default::default() };
        let scorer = HeuristicScorer::new(heavy).unwrap();
        assert_eq!(scorer.score(&r, EmergencyLevel::High), RouteScore::MIN);
    }

    #[test]
    fn string_level_is_strict() {
        let r = with_traffic(960);
        assert_eq!(score_route_str(&r, "high").unwrap().value(), 60);
        assert_eq!(score_route_str(&r, "Medium").unwrap().value(), 70);
        let err = score_route_str(&r, "urgent").unwrap_err();
        assert!(err.is_invalid_argument(), "{err}");
    }

    #[test]
    fn breakdown_reports_each_penalty() {
        let r = RouteCandidate { warning_count: 2, ..with_traffic(800) }; // 33 % → moderate
        let b = HeuristicScorer::default().breakdown(&r, EmergencyLevel::High);
        assert_eq!(b.warning_penalty, 10);
        assert_eq!(b.delay_penalty, 15);
        assert_eq!(b.turn_penalty, 10);
        assert_eq!(b.traffic_level, Some(TrafficLevel::Moderate));
        assert_eq!(b.score.value(), 65);
    }

    #[test]
    fn configured_weights_are_used() {
        let cfg = ScoringConfig {
            warning_penalty:   10,
            turn_penalty_high: 1,
            heavy:    DelayBand { above_pct: 40.0, penalty: 50 },
            moderate: DelayBand { above_pct: 25.0, penalty: 20 },
            light:    DelayBand { above_pct: 5.0,  penalty: 2 },
        };
        let scorer = HeuristicScorer::from_config(&cfg).unwrap();
        let r = RouteCandidate { warning_count: 1, ..with_traffic(900) }; // 50 % → heavy
        // 100 - 10 - 50 - 5
        assert_eq!(scorer.score(&r, EmergencyLevel::High).value(), 35);
        assert_eq!(scorer.config(), &cfg);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let cfg = ScoringConfig {
            light: DelayBand { above_pct: 80.0, penalty: 5 },
            ..Default::default()
        };
        assert!(HeuristicScorer::new(cfg).is_err());
    }

    #[test]
    fn bounds_monotonicity_determinism() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..2_000 {
            let r = RouteCandidate::new(
                rng.gen_range(0.0..100.0),
                rng.gen_range(0..5_000),
                rng.gen_range(0..10_000),
                rng.gen_range(0..60),
                rng.gen_range(0..30),
            );
            for level in EmergencyLevel::ALL {
                let s = score_route(&r, level);
                assert!(s >= RouteScore::MIN && s <= RouteScore::MAX);
                assert_eq!(s, score_route(&r, level));

                let worse = RouteCandidate { warning_count: r.warning_count + 1, ..r };
                assert!(score_route(&worse, level) <= s);
            }
            assert!(score_route(&r, EmergencyLevel::High) <= score_route(&r, EmergencyLevel::Medium));
        }
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ranking {
    use stms_core::{EmergencyLevel, TripId};

    use super::helpers::{base, with_traffic};
    use crate::{HeuristicScorer, RouteCandidate, RouteScore, RouteScorer, TripCandidates, best_route, rank_routes, rank_trips};

    #[test]
    fn sorts_descending_by_score() {
        let candidates = [with_traffic(960), base(), with_traffic(700)];
        let ranked = rank_routes(&candidates, EmergencyLevel::Medium, &HeuristicScorer::default());
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(ranked[0].score.value(), 100);
        assert_eq!(ranked[0].candidate, base());
    }

    #[test]
    fn ties_break_on_shorter_traffic_duration() {
        // Both within the clear band → both score 100.
        let slower = RouteCandidate::new(8.0, 600, 650, 2, 0);
        let faster = RouteCandidate::new(9.0, 600, 610, 7, 0);
        let ranked = rank_routes(&[slower, faster], EmergencyLevel::Medium, &HeuristicScorer::default());
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranked = rank_routes(&[base(), base(), base()], EmergencyLevel::Low, &HeuristicScorer::default());
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn high_priority_prefers_fewer_turns() {
        let twisty   = RouteCandidate::new(6.0, 600, 600, 20, 0);
        let straight = RouteCandidate::new(9.0, 700, 700, 2, 0);
        let scorer = HeuristicScorer::default();
        assert_eq!(best_route(&[twisty, straight], EmergencyLevel::Medium, &scorer).unwrap().index, 0);
        assert_eq!(best_route(&[twisty, straight], EmergencyLevel::High, &scorer).unwrap().index, 1);
    }

    #[test]
    fn empty_input() {
        assert!(rank_routes(&[], EmergencyLevel::High, &HeuristicScorer::default()).is_empty());
        assert!(best_route(&[], EmergencyLevel::High, &HeuristicScorer::default()).is_none());
    }

    /// Scores every route by distance only, to show the trait seam.
    struct ShortestFirst;

    impl RouteScorer for ShortestFirst {
        fn score(&self, route: &RouteCandidate, _level: EmergencyLevel) -> RouteScore {
            RouteScore::clamped(100 - route.distance_km as i64)
        }
    }

    #[test]
    fn custom_scorer_via_trait_object() {
        let scorer: &dyn RouteScorer = &ShortestFirst;
        let ranked = rank_routes(
            &[RouteCandidate::new(30.0, 1, 1, 0, 0), RouteCandidate::new(5.0, 1, 1, 0, 0)],
            EmergencyLevel::Medium,
            scorer,
        );
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].score.value(), 95);
    }

    #[test]
    fn trips_ranked_at_their_own_level() {
        let twisty   = RouteCandidate::new(6.0, 600, 600, 20, 0);
        let straight = RouteCandidate::new(9.0, 700, 700, 2, 0);
        let trips = vec![
            TripCandidates { trip: TripId(1), level: EmergencyLevel::High,   candidates: vec![twisty, straight] },
            TripCandidates { trip: TripId(2), level: EmergencyLevel::Medium, candidates: vec![twisty, straight] },
            TripCandidates { trip: TripId(3), level: EmergencyLevel::Low,    candidates: vec![] },
        ];
        let out = rank_trips(&trips, &HeuristicScorer::default());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].trip, TripId(1));
        assert_eq!(out[0].best().unwrap().index, 1);
        assert_eq!(out[1].best().unwrap().index, 0);
        assert!(out[2].best().is_none());
    }

    /// Runs in both builds; with `--features parallel` it pins the Rayon path
    /// to the sequential result.
    #[test]
    fn rank_trips_matches_per_trip_ranking() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(23);
        let trips: Vec<TripCandidates> = (0..200u64)
            .map(|id| TripCandidates {
                trip:       TripId(id),
                level:      EmergencyLevel::ALL[rng.gen_range(0..3)],
                candidates: (0..rng.gen_range(0..6))
                    .map(|_| {
                        let nominal = rng.gen_range(0..900);
                        RouteCandidate::new(
                            rng.gen_range(0.0..40.0),
                            nominal,
                            nominal + rng.gen_range(0..600),
                            rng.gen_range(0..15),
                            rng.gen_range(0..4),
                        )
                    })
                    .collect(),
            })
            .collect();

        let scorer = HeuristicScorer::default();
        let out = rank_trips(&trips, &scorer);
        assert_eq!(out.len(), trips.len());
        for (ranking, trip) in out.iter().zip(&trips) {
            assert_eq!(ranking.trip, trip.trip);
            assert_eq!(ranking.level, trip.level);
            assert_eq!(ranking.routes, rank_routes(&trip.candidates, trip.level, &scorer));
        }
    }
}

// ── Provider adapter ──────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use crate::{RoutingError, is_turn_maneuver, parse_directions_json};

    const TWO_ROUTES: &str = r#"{
        "status": "OK",
        "routes": [
            {
                "summary": "Outer Ring Rd",
                "warnings": ["Toll road", "Construction ahead"],
                "legs": [{
                    "distance": { "value": 5200, "text": "5.2 km" },
                    "duration": { "value": 600 },
                    "duration_in_traffic": { "value": 960 },
                    "steps": [
                        { "maneuver": "turn-left" },
                        { },
                        { "maneuver": "roundabout-right" },
                        { "maneuver": "straight" },
                        { "maneuver": "uturn-right" }
                    ]
                }]
            },
            {
                "summary": "MG Road",
                "legs": [
                    { "distance": { "value": 3000 }, "duration": { "value": 300 },
                      "steps": [{ "maneuver": "keep-left" }] },
                    { "distance": { "value": 1500 }, "duration": { "value": 200 },
                      "duration_in_traffic": { "value": 260 } }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_routes() {
        let c = parse_directions_json(TWO_ROUTES).unwrap();
        assert_eq!(c.len(), 2);

        assert!((c[0].distance_km - 5.2).abs() < 1e-9);
        assert_eq!(c[0].nominal_duration_secs, 600);
        assert_eq!(c[0].traffic_duration_secs, 960);
        assert_eq!(c[0].turn_count, 3);
        assert_eq!(c[0].warning_count, 2);

        // Two legs summed; missing duration_in_traffic falls back to duration.
        assert!((c[1].distance_km - 4.5).abs() < 1e-9);
        assert_eq!(c[1].nominal_duration_secs, 500);
        assert_eq!(c[1].traffic_duration_secs, 560);
        assert_eq!(c[1].turn_count, 1);
        assert_eq!(c[1].warning_count, 0);
    }

    #[test]
    fn zero_results_is_empty() {
        let c = parse_directions_json(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn provider_failure_status() {
        let err = parse_directions_json(
            r#"{ "status": "REQUEST_DENIED", "error_message": "bad key" }"#,
        )
        .unwrap_err();
        match err {
            RoutingError::Provider(msg) => assert_eq!(msg, "REQUEST_DENIED bad key"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn route_without_legs_is_skipped() {
        let c = parse_directions_json(r#"{ "routes": [{ "summary": "empty" }] }"#).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse_directions_json("{ not json"), Err(RoutingError::Parse(_))));
        let negative = r#"{ "routes": [{ "legs": [{ "distance": { "value": 10 }, "duration": { "value": -5 } }] }] }"#;
        assert!(matches!(parse_directions_json(negative), Err(RoutingError::Parse(_))));
    }

    #[test]
    fn negative_distance_is_invalid_argument() {
        let json = r#"{ "routes": [{ "legs": [{ "distance": { "value": -10 }, "duration": { "value": 5 } }] }] }"#;
        assert!(parse_directions_json(json).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn maneuver_classification() {
        for m in ["turn-left", "TURN-SHARP-RIGHT", "uturn-left", "ramp-right", "fork-left", "merge", "keep-right", "roundabout-left"] {
            assert!(is_turn_maneuver(m), "{m}");
        }
        for m in ["straight", "ferry", "", "depart"] {
            assert!(!is_turn_maneuver(m), "{m}");
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use stms_core::{EmergencyLevel, TripId};

    use crate::{RoutingError, load_candidates_csv, load_candidates_reader};

    const HEADER: &str =
        "trip_id,emergency_level,distance_km,nominal_duration_secs,traffic_duration_secs,turn_count,warning_count\n";

    fn load(body: &str) -> Result<Vec<crate::TripCandidates>, RoutingError> {
        load_candidates_reader(Cursor::new(format!("{HEADER}{body}")))
    }

    #[test]
    fn groups_by_trip_in_first_appearance_order() {
        let trips = load(
            "7,high,10.0,600,960,5,0\n\
             3,medium,4.2,420,430,3,0\n\
             7,high,11.5,660,700,9,1\n",
        )
        .unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip, TripId(7));
        assert_eq!(trips[0].level, EmergencyLevel::High);
        assert_eq!(trips[0].candidates.len(), 2);
        assert_eq!(trips[0].candidates[1].turn_count, 9);
        assert_eq!(trips[1].trip, TripId(3));
        assert_eq!(trips[1].candidates[0].nominal_duration_secs, 420);
    }

    #[test]
    fn empty_body() {
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn unknown_level_is_invalid_argument() {
        let err = load("1,critical,1.0,60,60,0,0\n").unwrap_err();
        assert!(err.is_invalid_argument(), "{err}");
    }

    #[test]
    fn conflicting_levels_within_trip() {
        let err = load("1,high,1.0,60,60,0,0\n1,low,2.0,60,60,0,0\n").unwrap_err();
        assert!(matches!(err, RoutingError::Parse(_)), "{err}");
    }

    #[test]
    fn negative_counts_are_parse_errors() {
        let err = load("1,high,1.0,60,60,-2,0\n").unwrap_err();
        assert!(matches!(err, RoutingError::Parse(_)), "{err}");
    }

    #[test]
    fn negative_distance_is_invalid_argument() {
        assert!(load("1,high,-1.0,60,60,0,0\n").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "{HEADER}1,low,2.5,120,150,1,0\n").unwrap();
        let trips = load_candidates_csv(file.path()).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].level, EmergencyLevel::Low);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_candidates_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RoutingError::Io(_)), "{err}");
    }
}
