//! The route path container and the projection result type.

use nav_core::GeoPoint;

/// An ordered sequence of geographic points defining a route, start to end.
///
/// Insertion order is significant — the sequence IS the route.  A
/// `RoutePath` is immutable once constructed and places no validity
/// requirements on its contents; [`PathIndex::build`][crate::PathIndex::build]
/// is where a path is rejected as untraversable (fewer than two points, or
/// zero total length).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    points: Vec<GeoPoint>,
}

impl RoutePath {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Build a path from `(lon, lat)` pairs — the coordinate order used by
    /// the GeoJSON geometry the surrounding application consumes.
    pub fn from_lon_lat(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(lon, lat)| GeoPoint::new(lon, lat)).collect(),
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<GeoPoint>> for RoutePath {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

// ── PathProjection ────────────────────────────────────────────────────────────

/// The result of projecting an arbitrary point onto a route path.
///
/// Invariants (for a projection produced by [`PathIndex::project`][crate::PathIndex::project]):
/// - `segment_index` is in `[0, path_len - 2]` — it names the pair of
///   consecutive vertices the projected point lies between.
/// - `distance_along_m` is monotonically non-decreasing as the query point
///   moves from path start to path end along the route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathProjection {
    /// Index of the path segment `(V[i], V[i+1])` the projection falls on.
    pub segment_index: usize,

    /// The projected point itself, on the segment.
    pub point: GeoPoint,

    /// Cumulative haversine distance from the path start to `point`, metres.
    pub distance_along_m: f64,
}
