//! GeoJSON trace backend.
//!
//! Accumulates positions in memory and writes one `LineString` geometry —
//! the traveled trace in `[lon, lat]` coordinate order — when finished.
//! Nothing touches the filesystem until [`finish`][TraceWriter::finish],
//! because a LineString cannot be emitted incrementally.

use std::path::{Path, PathBuf};

use crate::writer::TraceWriter;
use crate::{OutputResult, PositionRow};

/// Writes the position trace as a GeoJSON `LineString` geometry.
pub struct GeoJsonTraceWriter {
    path:        PathBuf,
    coordinates: Vec<[f64; 2]>,
    finished:    bool,
}

impl GeoJsonTraceWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path:        path.to_path_buf(),
            coordinates: Vec::new(),
            finished:    false,
        }
    }

    /// Coordinates accumulated so far, in delivery order.
    pub fn coordinates(&self) -> &[[f64; 2]] {
        &self.coordinates
    }
}

impl TraceWriter for GeoJsonTraceWriter {
    fn write_position(&mut self, row: &PositionRow) -> OutputResult<()> {
        self.coordinates.push([row.lon, row.lat]);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let geometry = serde_json::json!({
            "type": "LineString",
            "coordinates": self.coordinates,
        });
        std::fs::write(&self.path, serde_json::to_string(&geometry)?)?;
        Ok(())
    }
}
