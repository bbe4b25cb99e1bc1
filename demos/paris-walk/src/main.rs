//! paris-walk — smallest demo for the navsim route-simulation crates.
//!
//! Walks a virtual traveler along a fixed route through Paris, from the
//! Porte de la Chapelle area down to the 4th arrondissement, printing
//! progress each tick and writing CSV + GeoJSON traces to `output/`.
//! The tick rate is accelerated so the ~6 km walk finishes in seconds;
//! drop `TICKS` and use `SimulatorConfig::default()` for real-time pacing.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use nav_core::SimulatorConfig;
use nav_output::{CsvTraceWriter, GeoJsonTraceWriter, TraceRecorder};
use nav_path::{PathIndex, RoutePath};
use nav_sim::{PositionUpdate, RouteSimulator};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICKS:            u64 = 60;  // whole route in 60 ticks
const TICK_INTERVAL_MS: u64 = 100;

// Walking route between the demo's two endpoints, as a GeoJSON LineString
// in [longitude, latitude] order.
const ROUTE_GEOJSON: &str = r#"{
  "type": "LineString",
  "coordinates": [
    [2.3744, 48.9052],
    [2.3711, 48.8977],
    [2.3679, 48.8903],
    [2.3621, 48.8833],
    [2.3599, 48.8767],
    [2.3570, 48.8698],
    [2.3528, 48.8632],
    [2.3503, 48.8581],
    [2.3488, 48.8534]
  ]
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== paris-walk — navsim demo ===");

    // 1. Parse the route and build the index.
    let route = RoutePath::from_geojson(ROUTE_GEOJSON)?;
    let index = std::sync::Arc::new(PathIndex::build(&route)?);
    let total_m = index.total_length_m();
    println!(
        "Route: {} points, {} segments, {:.0} m",
        route.len(),
        index.segment_count(),
        total_m
    );

    // 2. Pace the walk so it completes in exactly TICKS ticks.  The step is
    //    nudged up so rounding cannot leave the last tick short of the total.
    let step_m = total_m / TICKS as f64 * (1.0 + 1e-9);
    let config = SimulatorConfig {
        tick_interval_ms: TICK_INTERVAL_MS,
        speed_mps:        step_m * 1000.0 / TICK_INTERVAL_MS as f64,
    };
    println!(
        "Pace: {:.1} m per tick, one tick every {} ms",
        step_m, TICK_INTERVAL_MS
    );
    println!();

    // 3. Set up trace output.
    std::fs::create_dir_all("output/paris-walk")?;
    let csv_recorder =
        TraceRecorder::new(CsvTraceWriter::new(Path::new("output/paris-walk/trace.csv"))?);
    let csv_errors = csv_recorder.error_slot();
    let geo_recorder = TraceRecorder::new(GeoJsonTraceWriter::new(Path::new(
        "output/paris-walk/trace.geojson",
    )));
    let geo_errors = geo_recorder.error_slot();

    // 4. Build the simulator and register listeners.
    let mut sim = RouteSimulator::with_index(index, config);
    sim.add_listener(Box::new(move |update: &PositionUpdate| {
        let pct = update.projection.distance_along_m / total_m * 100.0;
        println!(
            "tick {:>3}  {}  segment {}  {:>5.1} %",
            update.tick, update.position, update.projection.segment_index, pct
        );
    }));
    sim.add_listener(Box::new(csv_recorder));
    sim.add_listener(Box::new(geo_recorder));

    // 5. Run to completion.
    let t0 = Instant::now();
    sim.start()?;
    sim.wait();
    let elapsed = t0.elapsed();

    for errors in [csv_errors, geo_errors] {
        if let Some(e) = errors.take() {
            eprintln!("trace error: {e}");
        }
    }

    // 6. Summary.
    println!();
    println!("Walk complete in {:.3} s ({TICKS} ticks)", elapsed.as_secs_f64());
    println!("  output/paris-walk/trace.csv     : one row per tick");
    println!("  output/paris-walk/trace.geojson : traveled LineString");

    Ok(())
}
