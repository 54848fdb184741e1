//! `stms-core` — foundational types for the `rust_stms` traffic management core.
//!
//! This crate is a dependency of every other `stms-*` crate.  It has no
//! `stms-*` dependencies and performs no I/O apart from the optional JSON
//! config loader.
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, Haversine `distance_km`                     |
//! | [`ids`]         | `FacilityId`, `TripId`                                  |
//! | [`priority`]    | `EmergencyLevel` enum                                   |
//! | [`config`]      | `StmsConfig`, `EtaConfig`, `ScoringConfig`, `DelayBand` |
//! | [`error`]       | `StmsError`, `StmsResult`                               |
//!
//! All public value types derive `serde::Serialize`/`Deserialize`; the config
//! loader needs `serde` regardless, so there is no feature flag for it.

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod priority;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DelayBand, EtaConfig, ScoringConfig, StmsConfig};
pub use error::{StmsError, StmsResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use ids::{FacilityId, TripId};
pub use priority::EmergencyLevel;
