//! Listener trait and registration bookkeeping.

use std::panic::{AssertUnwindSafe, catch_unwind};

use nav_core::GeoPoint;
use nav_path::PathProjection;

/// What a listener receives on every tick: the marker position plus its
/// projection onto the route, so a renderer can draw the marker and the
/// traveled line from one delivery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionUpdate {
    /// 1-based tick counter for this run.
    pub tick: u64,

    /// The traveler's current position on the path.
    pub position: GeoPoint,

    /// `position` projected onto the path — segment index, projected point,
    /// and cumulative distance from the path start.
    pub projection: PathProjection,
}

/// Callbacks invoked by the simulator's tick worker.
///
/// `on_position` fires on every tick while Running, in registration order.
/// Callbacks run on the worker thread and block the tick loop — keep them
/// fast, or hand the update off to a queue and return.
///
/// The remaining methods have default no-op implementations so implementors
/// only override what they care about.
pub trait RouteListener: Send {
    /// Called on every tick with the current position and projection.
    fn on_position(&mut self, update: &PositionUpdate);

    /// Called once when the traveler reaches the path end.  `update` is the
    /// same final update `on_position` just delivered.
    fn on_complete(&mut self, _update: &PositionUpdate) {}

    /// Called when the simulation is stopped explicitly before completion.
    fn on_stop(&mut self) {}
}

/// A [`RouteListener`] that does nothing.
pub struct NoopListener;

impl RouteListener for NoopListener {
    fn on_position(&mut self, _update: &PositionUpdate) {}
}

/// Any `Send` closure over `&PositionUpdate` is a listener.
impl<F: FnMut(&PositionUpdate) + Send> RouteListener for F {
    fn on_position(&mut self, update: &PositionUpdate) {
        self(update)
    }
}

// ── Handles and registry ──────────────────────────────────────────────────────

/// Opaque handle identifying one registered listener.
///
/// Handles are unique per registry and never reused, so a stale handle
/// passed to `remove` after the listener is gone is a safe no-op.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerHandle(u64);

/// Listeners in registration order, which is also delivery order.
pub struct ListenerRegistry {
    entries: Vec<(ListenerHandle, Box<dyn RouteListener>)>,
    next_handle: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn add(&mut self, listener: Box<dyn RouteListener>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, listener));
        handle
    }

    /// Remove a listener; returns whether it was present.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `update` to every listener, isolating panics: a panicking
    /// listener is logged and skipped, and delivery continues with the
    /// next one.
    pub(crate) fn notify_position(&mut self, update: &PositionUpdate) {
        for (handle, listener) in &mut self.entries {
            if catch_unwind(AssertUnwindSafe(|| listener.on_position(update))).is_err() {
                tracing::warn!(?handle, tick = update.tick, "listener panicked in on_position");
            }
        }
    }

    pub(crate) fn notify_complete(&mut self, update: &PositionUpdate) {
        for (handle, listener) in &mut self.entries {
            if catch_unwind(AssertUnwindSafe(|| listener.on_complete(update))).is_err() {
                tracing::warn!(?handle, "listener panicked in on_complete");
            }
        }
    }

    pub(crate) fn notify_stop(&mut self) {
        for (handle, listener) in &mut self.entries {
            if catch_unwind(AssertUnwindSafe(|| listener.on_stop())).is_err() {
                tracing::warn!(?handle, "listener panicked in on_stop");
            }
        }
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
