//! `stms-routing` — score and rank alternative routes for an emergency trip.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`candidate`]  | `RouteCandidate`, `TripCandidates`                          |
//! | [`congestion`] | `TrafficLevel` — delay-percentage bands                     |
//! | [`scorer`]     | `RouteScorer` trait, `HeuristicScorer`, `RouteScore`, `score_route` |
//! | [`rank`]       | `rank_routes`, `best_route`, `rank_trips`                   |
//! | [`provider`]   | `parse_directions_json` — directions-API payload adapter    |
//! | [`loader`]     | `load_candidates_csv` — batch candidate input               |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `rank_trips` fans trips out over Rayon.                   |
//!
//! Rankings are a total order, so `parallel` changes wall-clock time only.
//! `cargo test -p stms-routing --features parallel` checks the Rayon path
//! against per-trip `rank_routes`.
//!
//! `RouteCandidate` and `TrafficLevel` always derive `Serialize` and
//! `Deserialize`; `serde` is already required by the provider adapter.

pub mod candidate;
pub mod congestion;
pub mod error;
pub mod loader;
pub mod provider;
pub mod rank;
pub mod scorer;

#[cfg(test)]
mod tests;

pub use candidate::{RouteCandidate, TripCandidates};
pub use congestion::TrafficLevel;
pub use error::{RoutingError, RoutingResult};
pub use loader::{load_candidates_csv, load_candidates_reader};
pub use provider::{TURN_MANEUVERS, is_turn_maneuver, parse_directions_json};
pub use rank::{RankedRoute, TripRanking, best_route, rank_routes, rank_trips};
pub use scorer::{HeuristicScorer, RouteScore, RouteScorer, ScoreBreakdown, score_route, score_route_str};
