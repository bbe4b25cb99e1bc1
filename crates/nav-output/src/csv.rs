//! CSV trace backend.
//!
//! One row per tick: `tick, lon, lat, segment, distance_m`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, PositionRow};

/// Writes the position trace to a single CSV file.
pub struct CsvTraceWriter {
    positions: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut positions = Writer::from_path(path)?;
        positions.write_record(["tick", "lon", "lat", "segment", "distance_m"])?;
        Ok(Self {
            positions,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_position(&mut self, row: &PositionRow) -> OutputResult<()> {
        self.positions.write_record(&[
            row.tick.to_string(),
            row.lon.to_string(),
            row.lat.to_string(),
            row.segment_index.to_string(),
            row.distance_along_m.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        Ok(())
    }
}
