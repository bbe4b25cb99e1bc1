//! Geographic coordinate type and distance math.
//!
//! `GeoPoint` uses `f64` (double-precision) longitude/latitude.  The route
//! projection in nav-path relies on exact vertex landing at cumulative
//! distance boundaries, so the extra precision over `f32` is not optional
//! here.  Coordinates are stored in `(lon, lat)` order because that is the
//! order the surrounding application's GeoJSON geometry uses.

/// A WGS-84 geographic coordinate: longitude and latitude in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// This is the ONE distance function used everywhere in navsim: segment
    /// lengths, projection distances, and cursor advancement all share it.
    /// Mixing it with a planar approximation would break the monotonicity of
    /// progress along a route.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1) in
    /// coordinate space.
    ///
    /// `t` is expected in `[0, 1]`; the boundaries return the endpoints
    /// exactly (no accumulated rounding), which `point_at_distance` depends
    /// on for vertex exactness.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
