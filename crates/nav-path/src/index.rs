//! Build-once geometric index over a route path.
//!
//! # Data layout
//!
//! `PathIndex` owns a copy of the path's vertices plus a parallel
//! `cumulative_m` array where `cumulative_m[i]` is the haversine distance
//! from the path start to vertex `i` (`cumulative_m[0] == 0`).  Progress
//! lookups are a binary search over that array; nearest-point queries are a
//! linear scan over segments.  The scan is deliberate: a spatial index keyed
//! on planar lat/lon distance would disagree with the haversine metric near
//! ties, and path sizes here (a single route geometry) make O(segments)
//! per query a non-issue.

use nav_core::GeoPoint;

use crate::{PathError, PathProjection, PathResult, RoutePath};

/// Immutable geometric index answering "what is the closest point on the
/// path to Q, and how far along the path is it?".
///
/// Built once from a [`RoutePath`]; safe to share read-only across any
/// number of simulators (e.g. behind an `Arc`).
#[derive(Clone, Debug)]
pub struct PathIndex {
    points: Vec<GeoPoint>,

    /// `cumulative_m[i]` = distance from path start to vertex `i`, metres.
    /// Same length as `points`; non-decreasing; starts at 0.
    cumulative_m: Vec<f64>,
}

impl PathIndex {
    /// Build the index, validating the path.
    ///
    /// Rejects paths with fewer than two points
    /// ([`PathError::TooFewPoints`]) and paths whose points all coincide
    /// ([`PathError::ZeroLength`]) — a zero-length route has no traversable
    /// progress and would otherwise make the simulator's completion
    /// condition degenerate.
    pub fn build(path: &RoutePath) -> PathResult<Self> {
        let points = path.points();
        if points.len() < 2 {
            return Err(PathError::TooFewPoints { got: points.len() });
        }

        let mut cumulative_m = Vec::with_capacity(points.len());
        cumulative_m.push(0.0);
        for pair in points.windows(2) {
            let so_far = cumulative_m[cumulative_m.len() - 1];
            cumulative_m.push(so_far + pair[0].distance_m(pair[1]));
        }

        if cumulative_m[cumulative_m.len() - 1] <= 0.0 {
            return Err(PathError::ZeroLength);
        }

        Ok(Self {
            points: points.to_vec(),
            cumulative_m,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Total path length in metres.  Pure function of the path; idempotent.
    #[inline]
    pub fn total_length_m(&self) -> f64 {
        self.cumulative_m[self.cumulative_m.len() - 1]
    }

    /// Number of segments (consecutive vertex pairs).  Always ≥ 1.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// The path vertices the index was built from.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Project `query` onto the path: the closest point over all segments.
    ///
    /// Each segment's candidate is the orthogonal projection with the
    /// parameter clamped to the segment's extent (segment-point, not
    /// line-point projection).  Candidates are compared by haversine
    /// distance to `query`; a strictly-less comparison keeps the LOWER
    /// segment index on exact ties, so a query sitting on a shared vertex
    /// of two segments deterministically reports the earlier one.
    pub fn project(&self, query: GeoPoint) -> PathProjection {
        let mut best = self.candidate(0, query);
        let mut best_off = query.distance_m(best.point);

        for i in 1..self.segment_count() {
            let candidate = self.candidate(i, query);
            let off = query.distance_m(candidate.point);
            if off < best_off {
                best = candidate;
                best_off = off;
            }
        }
        best
    }

    /// The interpolated point at cumulative distance `d` from the path
    /// start, clamped to `[0, total_length_m]`.
    ///
    /// Exact at vertices: `point_at_distance(0)` is the first vertex,
    /// `point_at_distance(total_length_m())` is the last, and any `d`
    /// landing on a vertex boundary returns that vertex with no rounding.
    pub fn point_at_distance(&self, d: f64) -> GeoPoint {
        let total = self.total_length_m();
        if d <= 0.0 {
            return self.points[0];
        }
        if d >= total {
            return self.points[self.points.len() - 1];
        }

        // First vertex at or beyond d; the segment ending there contains d.
        // Zero-length segments are skipped naturally: d can never fall
        // strictly inside one.
        let end = self.cumulative_m.partition_point(|&c| c < d);
        let seg = end - 1;
        let seg_len = self.cumulative_m[end] - self.cumulative_m[seg];
        let t = (d - self.cumulative_m[seg]) / seg_len;
        self.points[seg].lerp(self.points[end], t)
    }

    /// The already-traveled portion of the path: vertices up to and
    /// including `projection.segment_index`, then the projected point.
    ///
    /// This is the geometry a renderer draws as the progressively-completing
    /// line behind the moving marker.
    pub fn traveled_subpath(&self, projection: &PathProjection) -> Vec<GeoPoint> {
        let mut out: Vec<GeoPoint> = self.points[..=projection.segment_index].to_vec();
        if out[out.len() - 1] != projection.point {
            out.push(projection.point);
        }
        out
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Closest point on segment `i` to `query`, as a full projection.
    fn candidate(&self, i: usize, query: GeoPoint) -> PathProjection {
        let a = self.points[i];
        let b = self.points[i + 1];
        let t = segment_parameter(a, b, query);
        let point = a.lerp(b, t);
        PathProjection {
            segment_index: i,
            point,
            distance_along_m: self.cumulative_m[i] + a.distance_m(point),
        }
    }
}

/// Orthogonal-projection parameter of `q` onto segment `a → b`, clamped to
/// `[0, 1]`.
///
/// Computed in a local equirectangular frame anchored at `a` (longitude
/// deltas scaled by cos of `a`'s latitude) so the parameter agrees with the
/// haversine metric to first order at route scale.  A degenerate segment
/// (`a == b`) projects everything to `a`.
fn segment_parameter(a: GeoPoint, b: GeoPoint, q: GeoPoint) -> f64 {
    let k = a.lat.to_radians().cos();
    let bx = (b.lon - a.lon) * k;
    let by = b.lat - a.lat;
    let qx = (q.lon - a.lon) * k;
    let qy = q.lat - a.lat;

    let len2 = bx * bx + by * by;
    if len2 <= 0.0 {
        return 0.0;
    }
    ((qx * bx + qy * by) / len2).clamp(0.0, 1.0)
}
