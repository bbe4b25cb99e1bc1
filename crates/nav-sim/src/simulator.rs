//! The `RouteSimulator` and its tick worker.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use nav_core::SimulatorConfig;
use nav_path::{PathIndex, RoutePath};

use crate::{
    ListenerHandle, PositionUpdate, RouteListener, RunState, SimulationState, SimulatorError,
    SimulatorResult,
};

/// Drives a virtual traveler along a route path on a fixed schedule and
/// broadcasts its progress to registered listeners.
///
/// State machine: Idle → Running (via [`start`][Self::start]) → Stopped
/// (via [`stop`][Self::stop] or path completion).  Stopped is terminal.
///
/// # Threading
///
/// One logical owner: the `&mut self` operations must not be called
/// concurrently from multiple threads without external synchronization.
/// The path index is immutable and may be shared read-only across any
/// number of simulators via [`with_index`][Self::with_index]; the cursor
/// and listener registry live behind a mutex shared only with this
/// simulator's own tick worker.
pub struct RouteSimulator {
    index: Arc<PathIndex>,
    config: SimulatorConfig,
    shared: Arc<Mutex<SimulationState>>,
    stop_tx: Option<mpsc::Sender<()>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl RouteSimulator {
    /// Build a simulator from a path, validating it.
    ///
    /// Fails with [`SimulatorError::Path`] if the path has fewer than two
    /// points or zero total length.
    pub fn new(path: &RoutePath, config: SimulatorConfig) -> SimulatorResult<Self> {
        Ok(Self::with_index(Arc::new(PathIndex::build(path)?), config))
    }

    /// Build a simulator over an already-built (and possibly shared) index.
    pub fn with_index(index: Arc<PathIndex>, config: SimulatorConfig) -> Self {
        Self {
            index,
            config,
            shared: Arc::new(Mutex::new(SimulationState::idle())),
            stop_tx: None,
            worker: None,
        }
    }

    /// The index this simulator travels.
    pub fn index(&self) -> &Arc<PathIndex> {
        &self.index
    }

    pub fn config(&self) -> SimulatorConfig {
        self.config
    }

    /// Current lifecycle state.
    pub fn run_state(&self) -> RunState {
        self.lock().run_state
    }

    // ── Listener management ───────────────────────────────────────────────

    /// Register a listener; delivery order across listeners is registration
    /// order.  Listeners registered after the run reached Stopped never
    /// fire (the run's registry was already dropped with its last tick).
    pub fn add_listener(&mut self, listener: Box<dyn RouteListener>) -> ListenerHandle {
        self.lock().listeners.add(listener)
    }

    /// Remove a previously registered listener.  Safe in any state; a
    /// handle that was already removed (or cleared by stop/completion) is
    /// a no-op.
    pub fn remove_listener(&mut self, handle: ListenerHandle) {
        self.lock().listeners.remove(handle);
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Begin the run: Idle → Running, spawning the tick worker.
    ///
    /// Errors: [`SimulatorError::NotIdle`] if the simulator already ran (or
    /// is running); [`SimulatorError::InvalidConfiguration`] if the speed
    /// is non-positive or non-finite, or the tick interval is zero — a
    /// zero speed would tick forever without reaching the path end.
    pub fn start(&mut self) -> SimulatorResult<()> {
        if !(self.config.speed_mps.is_finite() && self.config.speed_mps > 0.0) {
            return Err(SimulatorError::InvalidConfiguration {
                what: "speed_mps",
                value: self.config.speed_mps,
            });
        }
        if self.config.tick_interval_ms == 0 {
            return Err(SimulatorError::InvalidConfiguration {
                what: "tick_interval_ms",
                value: 0.0,
            });
        }

        {
            let mut state = self.lock();
            if state.run_state != RunState::Idle {
                return Err(SimulatorError::NotIdle(state.run_state));
            }
            state.run_state = RunState::Running;
            state.distance_m = 0.0;
            state.tick = 0;
        }

        tracing::info!(
            total_m = self.index.total_length_m(),
            interval_ms = self.config.tick_interval_ms,
            speed_mps = self.config.speed_mps,
            "route simulation started"
        );

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let index = Arc::clone(&self.index);
        let shared = Arc::clone(&self.shared);
        let config = self.config;
        let interval = Duration::from_millis(config.tick_interval_ms);

        self.stop_tx = Some(stop_tx);
        self.worker = Some(thread::spawn(move || {
            loop {
                // The inter-tick sleep doubles as the cancellation point:
                // stop() sends on the channel and wakes this immediately.
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_once(&index, &config, &shared) == TickOutcome::Finished {
                            break;
                        }
                    }
                    // Stop requested, or the simulator was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        }));
        Ok(())
    }

    /// Halt the run: cancels the pending tick, drops all listeners, and
    /// joins the worker.  Idempotent — stopping an already-Stopped
    /// simulator does nothing; stopping an Idle one just makes it
    /// unstartable.  A tick in flight finishes delivering to the listeners
    /// it already reached; no new tick fires afterward.
    pub fn stop(&mut self) {
        let was_running = {
            let mut state = self.lock();
            match state.run_state {
                RunState::Stopped => false,
                previous => {
                    state.run_state = RunState::Stopped;
                    state.listeners.notify_stop();
                    state.listeners.clear();
                    previous == RunState::Running
                }
            }
        };

        if let Some(stop_tx) = self.stop_tx.take() {
            // Worker may already have exited on its own; ignore.
            let _ = stop_tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }

        if was_running {
            tracing::info!("route simulation stopped");
        }
    }

    /// Block until the tick worker exits — either natural path completion
    /// or a concurrent `stop`.  Returns immediately if no run is active.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.stop_tx = None;
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Lock the shared state, recovering from poisoning: listener panics
    /// are already caught inside the tick, so a poisoned lock can only
    /// mean a tick died between field writes that are individually valid.
    fn lock(&self) -> MutexGuard<'_, SimulationState> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for RouteSimulator {
    fn drop(&mut self) {
        self.stop();
    }
}

// ── Tick logic ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    Advanced,
    Finished,
}

/// One tick: advance the cursor, locate and project the position, notify
/// listeners.  Runs entirely under the shared-state lock so ticks are
/// strictly sequential with respect to `stop` and listener mutation.
pub(crate) fn tick_once(
    index: &PathIndex,
    config: &SimulatorConfig,
    shared: &Mutex<SimulationState>,
) -> TickOutcome {
    let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);

    // stop() won the race while we were sleeping.
    if state.run_state != RunState::Running {
        return TickOutcome::Finished;
    }

    let total = index.total_length_m();
    state.tick += 1;
    state.distance_m = (state.distance_m + config.distance_per_tick_m()).min(total);

    let position = index.point_at_distance(state.distance_m);
    let projection = index.project(position);
    let update = PositionUpdate {
        tick: state.tick,
        position,
        projection,
    };

    let finished = state.distance_m >= total;
    state.listeners.notify_position(&update);

    if finished {
        state.listeners.notify_complete(&update);
        state.listeners.clear();
        state.run_state = RunState::Stopped;
        tracing::info!(ticks = state.tick, "route completed");
        TickOutcome::Finished
    } else {
        tracing::debug!(
            tick = state.tick,
            distance_m = state.distance_m,
            segment = update.projection.segment_index,
            "tick"
        );
        TickOutcome::Advanced
    }
}
