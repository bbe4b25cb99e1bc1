//! Run-state machine and per-run cursor state.

use std::fmt;

use crate::ListenerRegistry;

/// Lifecycle state of a [`RouteSimulator`][crate::RouteSimulator].
///
/// Transitions: `Idle → Running` via `start()`; `Running → Stopped` via
/// `stop()` or path completion; `Idle → Stopped` via `stop()` before any
/// start.  Stopped is terminal — a new simulator must be constructed to
/// travel the route again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        })
    }
}

/// The mutable state of one simulation run.
///
/// Owned exclusively by a simulator and its tick worker (behind one mutex);
/// mutated only by `start`/`stop` and the tick loop.
pub struct SimulationState {
    /// Current lifecycle state.
    pub run_state: RunState,

    /// Cumulative distance traveled from the path start, metres.
    pub distance_m: f64,

    /// Number of ticks delivered so far.
    pub tick: u64,

    /// Registered listeners, in registration order.  Dropped when the run
    /// reaches Stopped.
    pub listeners: ListenerRegistry,
}

impl SimulationState {
    /// Fresh state for a not-yet-started simulator.
    pub fn idle() -> Self {
        Self {
            run_state: RunState::Idle,
            distance_m: 0.0,
            tick: 0,
            listeners: ListenerRegistry::new(),
        }
    }
}
