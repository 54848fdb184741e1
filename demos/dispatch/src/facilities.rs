//! Built-in facility roster for central Bangalore.

use anyhow::Result;

use stms_core::GeoPoint;
use stms_dispatch::{FacilityIndex, FacilityIndexBuilder, FacilityKind};

/// Four hospitals, three ambulances and two police units.
pub fn build_roster() -> Result<FacilityIndex> {
    let mut b = FacilityIndexBuilder::new();

    b.add(FacilityKind::Hospital,   "Victoria Hospital",     GeoPoint::new(12.9634, 77.5736))?;
    b.add(FacilityKind::Hospital,   "Manipal Old Airport Rd", GeoPoint::new(12.9592, 77.6486))?;
    b.add(FacilityKind::Hospital,   "St John's Medical",     GeoPoint::new(12.9298, 77.6174))?;
    b.add(FacilityKind::Hospital,   "Bowring Hospital",      GeoPoint::new(12.9822, 77.6046))?;

    b.add(FacilityKind::Ambulance,  "KA-01-A-108",           GeoPoint::new(12.9716, 77.5946))?;
    b.add(FacilityKind::Ambulance,  "KA-03-B-112",           GeoPoint::new(12.9352, 77.6245))?;
    b.add(FacilityKind::Ambulance,  "KA-05-C-104",           GeoPoint::new(13.0035, 77.5890))?;

    b.add(FacilityKind::PoliceUnit, "Indiranagar Traffic",   GeoPoint::new(12.9719, 77.6412))?;
    b.add(FacilityKind::PoliceUnit, "Cubbon Park Traffic",   GeoPoint::new(12.9763, 77.5929))?;

    Ok(b.build())
}
