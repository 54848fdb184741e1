//! Spatial index over registered facilities.
//!
//! # Spatial index
//!
//! One R-tree (via `rstar`) per [`FacilityKind`].  Each facility is stored as
//! a point on the **unit sphere** (`[x, y, z]`) rather than as raw
//! `[lat, lng]`: straight-line (chord) distance between unit vectors grows
//! monotonically with great-circle distance, so R-tree nearest-neighbour
//! order is exactly Haversine order everywhere on the globe, including near
//! the poles and across the antimeridian.  Reported distances are always
//! recomputed with [`GeoPoint::distance_km`].

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use stms_core::{EARTH_RADIUS_KM, FacilityId, GeoPoint, StmsError, StmsResult};

use crate::{DispatchError, DispatchResult, Facility, FacilityKind};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct FacilityEntry {
    point: [f64; 3],
    id:    FacilityId,
}

impl RTreeObject for FacilityEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FacilityEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

fn unit_vector(p: GeoPoint) -> [f64; 3] {
    let (lat, lng) = (p.lat.to_radians(), p.lng.to_radians());
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}

/// Sort `(id, km)` pairs by distance, then id, for a deterministic order.
fn sort_by_distance(hits: &mut [(FacilityId, f64)]) {
    hits.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
}

// ── FacilityIndex ─────────────────────────────────────────────────────────────

/// Immutable facility roster with per-kind nearest-neighbour queries.
///
/// Do not construct directly; use [`FacilityIndexBuilder`].
pub struct FacilityIndex {
    /// Indexed by `FacilityId`.
    facilities: Vec<Facility>,
    /// Indexed by `FacilityKind::slot()`.
    trees:      [RTree<FacilityEntry>; 3],
}

impl FacilityIndex {
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Number of registered facilities of `kind`.
    pub fn count(&self, kind: FacilityKind) -> usize {
        self.trees[kind.slot()].size()
    }

    pub fn get(&self, id: FacilityId) -> Option<&Facility> {
        self.facilities.get(id.index())
    }

    /// Like [`get`](Self::get) but reports an unknown id as an error.
    pub fn facility(&self, id: FacilityId) -> DispatchResult<&Facility> {
        self.get(id).ok_or(DispatchError::UnknownFacility(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> + '_ {
        self.facilities.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The closest facility of `kind` to `pos`, with its distance in km.
    ///
    /// Returns `None` if no facility of that kind is registered or `pos` is
    /// not a valid coordinate.
    pub fn nearest(&self, pos: GeoPoint, kind: FacilityKind) -> Option<(FacilityId, f64)> {
        self.k_nearest(pos, kind, 1).into_iter().next()
    }

    /// Up to `k` closest facilities of `kind`, ascending by distance.
    ///
    /// Empty for an out-of-range or `NaN` query point.
    pub fn k_nearest(&self, pos: GeoPoint, kind: FacilityKind, k: usize) -> Vec<(FacilityId, f64)> {
        if !pos.is_valid() {
            log::debug!("k_nearest: invalid query point {pos}");
            return Vec::new();
        }
        let mut hits: Vec<(FacilityId, f64)> = self.trees[kind.slot()]
            .nearest_neighbor_iter(&unit_vector(pos))
            .take(k)
            .map(|e| (e.id, pos.distance_km(self.facilities[e.id.index()].location)))
            .collect();
        sort_by_distance(&mut hits);
        hits
    }

    /// All facilities of `kind` within `radius_km` of `pos`, ascending by
    /// distance.
    pub fn within_radius_km(&self, pos: GeoPoint, kind: FacilityKind, radius_km: f64) -> Vec<(FacilityId, f64)> {
        if !pos.is_valid() || radius_km.is_nan() || radius_km < 0.0 {
            return Vec::new();
        }
        let tree = &self.trees[kind.slot()];

        // Chord for a great-circle arc; a half circumference or more covers
        // the whole sphere (chord ≤ 2).
        let half_arc = radius_km / EARTH_RADIUS_KM * 0.5;
        let chord = if half_arc >= std::f64::consts::FRAC_PI_2 { 2.0 } else { 2.0 * half_arc.sin() };
        let max_chord_2 = chord * chord * (1.0 + 1e-9) + 1e-12;

        let mut hits: Vec<(FacilityId, f64)> = tree
            .locate_within_distance(unit_vector(pos), max_chord_2)
            .map(|e| (e.id, pos.distance_km(self.facilities[e.id.index()].location)))
            .filter(|&(_, d)| d <= radius_km)
            .collect();
        sort_by_distance(&mut hits);
        hits
    }
}

// ── FacilityIndexBuilder ──────────────────────────────────────────────────────

/// Register facilities, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use stms_core::GeoPoint;
/// use stms_dispatch::{FacilityIndexBuilder, FacilityKind};
///
/// let mut b = FacilityIndexBuilder::new();
/// let h = b.add(FacilityKind::Hospital, "City General", GeoPoint::new(12.97, 77.59)).unwrap();
/// let index = b.build();
/// assert_eq!(index.nearest(GeoPoint::new(12.98, 77.60), FacilityKind::Hospital).unwrap().0, h);
/// ```
#[derive(Default)]
pub struct FacilityIndexBuilder {
    facilities: Vec<Facility>,
}

impl FacilityIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a facility and return its `FacilityId` (sequential from 0).
    ///
    /// Coordinates outside the WGS-84 range are rejected.
    pub fn add(&mut self, kind: FacilityKind, name: impl Into<String>, location: GeoPoint) -> StmsResult<FacilityId> {
        let location = GeoPoint::try_new(location.lat, location.lng)?;
        let id = FacilityId::try_from(self.facilities.len())
            .map_err(|_| StmsError::invalid("facility roster is full"))?;
        self.facilities.push(Facility { id, kind, name: name.into(), location });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Consume the builder and bulk-load one R-tree per kind.
    pub fn build(self) -> FacilityIndex {
        let trees = FacilityKind::ALL.map(|kind| {
            let entries: Vec<FacilityEntry> = self
                .facilities
                .iter()
                .filter(|f| f.kind == kind)
                .map(|f| FacilityEntry { point: unit_vector(f.location), id: f.id })
                .collect();
            RTree::bulk_load(entries)
        });
        log::debug!(
            "facility index: {} hospitals, {} ambulances, {} police units",
            trees[FacilityKind::Hospital.slot()].size(),
            trees[FacilityKind::Ambulance.slot()].size(),
            trees[FacilityKind::PoliceUnit.slot()].size()
        );
        FacilityIndex { facilities: self.facilities, trees }
    }
}
