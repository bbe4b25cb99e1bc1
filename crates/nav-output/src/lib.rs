//! `nav-output` — position trace writers for navsim.
//!
//! Two backends, both implementing [`TraceWriter`]:
//!
//! | Backend                | Output                                          |
//! |------------------------|-------------------------------------------------|
//! | [`CsvTraceWriter`]     | one CSV row per tick                            |
//! | [`GeoJsonTraceWriter`] | the traveled trace as a GeoJSON `LineString`    |
//!
//! Backends are driven by [`TraceRecorder`], which implements
//! `nav_sim::RouteListener` and can be registered on a
//! [`RouteSimulator`][nav_sim::RouteSimulator] like any other listener.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvTraceWriter, TraceRecorder};
//!
//! let recorder = TraceRecorder::new(CsvTraceWriter::new(Path::new("trace.csv"))?);
//! let errors = recorder.error_slot();
//! sim.add_listener(Box::new(recorder));
//! sim.start()?;
//! sim.wait();
//! assert!(errors.take().is_none());
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::GeoJsonTraceWriter;
pub use recorder::{ErrorSlot, TraceRecorder};
pub use row::PositionRow;
pub use writer::TraceWriter;
