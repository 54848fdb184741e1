//! `stms-dispatch` — which hospital, ambulance or police unit is closest.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`facility`]   | `Facility`, `FacilityKind`                                   |
//! | [`index`]      | `FacilityIndex` (per-kind R-tree), `FacilityIndexBuilder`    |
//! | [`dispatcher`] | `Dispatcher`, `DispatchSuggestion` — ETA-ordered candidates  |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                         |
//!
//! The index is an ordinary owned value: build it at startup (or whenever the
//! facility roster changes) and hand it to a [`Dispatcher`].  Nothing here
//! keeps global state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Facility`.    |

pub mod dispatcher;
pub mod error;
pub mod facility;
pub mod index;


pub use dispatcher::{DispatchSuggestion, Dispatcher};
pub use error::{DispatchError, DispatchResult};
pub use facility::{Facility, FacilityKind};
pub use index::{FacilityIndex, FacilityIndexBuilder};
