//! `stms-eta` — estimated time of arrival from a distance and a speed.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`estimate`] | `estimate_eta`, `EtaEstimator`, `EtaResult`                |
//! | [`format`]   | `format_minutes`, `format_distance_km`, `format_duration_secs` |
//!
//! # Time model
//!
//! `now` is always injected as a `chrono::DateTime<Tz>`; the estimator never
//! reads the clock itself except in [`estimate_eta_from_now`].  The arrival
//! time is expressed in the same zone as `now`, which is what makes the
//! formatted `HH:MM` string local to the caller.
//!
//! Errors are reported as [`stms_core::StmsError::InvalidArgument`].

pub mod estimate;
pub mod format;


pub use estimate::{
    DEFAULT_SPEED_KMH, EtaEstimator, EtaResult, estimate_eta, estimate_eta_between,
    estimate_eta_default, estimate_eta_from_now,
};
pub use format::{format_distance_km, format_duration_secs, format_minutes};
