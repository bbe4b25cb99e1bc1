//! The `TraceWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow};

/// Trait implemented by the CSV and GeoJSON trace writers.
///
/// Driven by [`TraceRecorder`][crate::TraceRecorder], which stores errors
/// internally because listener callbacks have no return value.
pub trait TraceWriter {
    /// Write one position row.
    fn write_position(&mut self, row: &PositionRow) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
