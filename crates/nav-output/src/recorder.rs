//! `TraceRecorder<W>` — bridges `RouteListener` to a `TraceWriter`.

use std::sync::{Arc, Mutex, PoisonError};

use nav_sim::{PositionUpdate, RouteListener};

use crate::writer::TraceWriter;
use crate::{OutputError, PositionRow};

/// A [`RouteListener`] that writes every delivered position to any
/// [`TraceWriter`] backend (CSV, GeoJSON).
///
/// Listener callbacks have no return value, so write errors are stored in a
/// shared slot instead.  Clone an [`ErrorSlot`] with
/// [`error_slot`][Self::error_slot] BEFORE handing the recorder to a
/// simulator, then check it after the run:
///
/// ```rust,ignore
/// let recorder = TraceRecorder::new(CsvTraceWriter::new(&path)?);
/// let errors = recorder.error_slot();
/// sim.add_listener(Box::new(recorder));
/// sim.start()?;
/// sim.wait();
/// if let Some(e) = errors.take() {
///     eprintln!("trace error: {e}");
/// }
/// ```
pub struct TraceRecorder<W: TraceWriter> {
    writer:     W,
    last_error: ErrorSlot,
}

/// Shared handle to a recorder's first write error.
#[derive(Clone, Default)]
pub struct ErrorSlot(Arc<Mutex<Option<OutputError>>>);

impl ErrorSlot {
    /// Take the stored error (if any).  Returns `None` if all writes
    /// succeeded so far.
    pub fn take(&self) -> Option<OutputError> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<W: TraceWriter> TraceRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: ErrorSlot::default(),
        }
    }

    /// A shared handle to this recorder's error state; survives the recorder
    /// being boxed and handed to a simulator.
    pub fn error_slot(&self) -> ErrorSlot {
        self.last_error.clone()
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect accumulated state).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            let mut slot = self.last_error.0.lock().unwrap_or_else(PoisonError::into_inner);
            // Keep only the first error.
            if slot.is_none() {
                *slot = Some(e);
            }
        }
    }
}

impl<W: TraceWriter + Send> RouteListener for TraceRecorder<W> {
    fn on_position(&mut self, update: &PositionUpdate) {
        let row = PositionRow::from(update);
        let result = self.writer.write_position(&row);
        self.store_err(result);
    }

    fn on_complete(&mut self, _update: &PositionUpdate) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_stop(&mut self) {
        // A stopped run still flushes the partial trace.
        let result = self.writer.finish();
        self.store_err(result);
    }
}
