//! Simulator configuration.
//!
//! Both knobs have explicit defaults rather than magic constants buried in
//! the tick loop: one tick per second at a walking pace, matching the demo
//! route the engine was built for.  Validation happens when the simulator is
//! started, not here — a config struct with out-of-range values is inert
//! until someone tries to run with it.

/// Configuration for a route simulation run.
///
/// Typically constructed via [`Default`] and adjusted with struct-update
/// syntax:
///
/// ```
/// use nav_core::SimulatorConfig;
///
/// let cfg = SimulatorConfig { speed_mps: 25.0, ..Default::default() };
/// assert_eq!(cfg.tick_interval_ms, 1000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatorConfig {
    /// Milliseconds between ticks.  Must be positive; rejected at
    /// `RouteSimulator::start` otherwise.  Default: 1000 (one tick/second).
    pub tick_interval_ms: u64,

    /// Traveler speed in metres per second.  Must be positive and finite;
    /// rejected at `RouteSimulator::start` otherwise (a zero speed would
    /// never reach the end of the route).  Default: 1.4 (walking pace).
    pub speed_mps: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            speed_mps: 1.4,
        }
    }
}

impl SimulatorConfig {
    /// Distance the traveler covers in one tick, in metres.
    #[inline]
    pub fn distance_per_tick_m(&self) -> f64 {
        self.speed_mps * self.tick_interval_ms as f64 / 1000.0
    }
}
