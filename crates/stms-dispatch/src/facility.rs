//! Registered response facilities.

use stms_core::{FacilityId, GeoPoint};

/// What a facility is.  Lookups are always per kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacilityKind {
    Hospital,
    Ambulance,
    PoliceUnit,
}

impl FacilityKind {
    pub const ALL: [FacilityKind; 3] =
        [FacilityKind::Hospital, FacilityKind::Ambulance, FacilityKind::PoliceUnit];

    /// Dense index into per-kind arrays.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            FacilityKind::Hospital   => 0,
            FacilityKind::Ambulance  => 1,
            FacilityKind::PoliceUnit => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacilityKind::Hospital   => "hospital",
            FacilityKind::Ambulance  => "ambulance",
            FacilityKind::PoliceUnit => "police_unit",
        }
    }
}

impl std::fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hospital, ambulance or police unit at a fixed (or last reported)
/// location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id:       FacilityId,
    pub kind:     FacilityKind,
    pub name:     String,
    pub location: GeoPoint,
}
