//! Plain data row types written by trace backends.

use nav_sim::PositionUpdate;

/// One delivered position, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub tick:             u64,
    pub lon:              f64,
    pub lat:              f64,
    /// Index of the route segment the position projects onto.
    pub segment_index:    usize,
    /// Cumulative distance from the route start, metres.
    pub distance_along_m: f64,
}

impl From<&PositionUpdate> for PositionRow {
    fn from(update: &PositionUpdate) -> Self {
        Self {
            tick:             update.tick,
            lon:              update.position.lon,
            lat:              update.position.lat,
            segment_index:    update.projection.segment_index,
            distance_along_m: update.projection.distance_along_m,
        }
    }
}
