//! `nav-sim` — the timed route simulator.
//!
//! # Tick loop
//!
//! ```text
//! start():
//!   validate config, Idle → Running, spawn tick worker
//! worker, every tick_interval_ms (cancellable sleep):
//!   ① Advance  — cursor += speed · interval, clamped to path length
//!   ② Locate   — position = point_at_distance(cursor)
//!   ③ Project  — projection = project(position)   (full projection is
//!                always delivered, matching the rendering contract)
//!   ④ Notify   — every listener, in registration order
//!   at path end: deliver the final update once, Running → Stopped
//! stop():
//!   cancel the pending sleep, Running → Stopped, drop listeners
//! ```
//!
//! # Concurrency contract
//!
//! A `RouteSimulator` has ONE logical owner: `start`, `stop`,
//! `add_listener`, and `remove_listener` take `&mut self` and must not be
//! called concurrently from multiple threads without external
//! synchronization.  Ticks are strictly sequential — each tick's listener
//! notifications complete before the next tick fires — so listeners never
//! observe out-of-order positions.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_core::SimulatorConfig;
//! use nav_path::RoutePath;
//! use nav_sim::RouteSimulator;
//!
//! let path = RoutePath::from_geojson(&route_json)?;
//! let mut sim = RouteSimulator::new(&path, SimulatorConfig::default())?;
//! sim.add_listener(Box::new(|update: &nav_sim::PositionUpdate| {
//!     println!("marker at {}", update.position);
//! }));
//! sim.start()?;
//! sim.wait();
//! ```

pub mod error;
pub mod listener;
pub mod simulator;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimulatorError, SimulatorResult};
pub use listener::{ListenerHandle, ListenerRegistry, NoopListener, PositionUpdate, RouteListener};
pub use simulator::RouteSimulator;
pub use state::{RunState, SimulationState};
