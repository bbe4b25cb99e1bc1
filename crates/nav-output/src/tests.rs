//! Integration tests for nav-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::PositionRow;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(tick: u64) -> PositionRow {
        PositionRow {
            tick,
            lon:              2.35 + tick as f64 * 0.001,
            lat:              48.85,
            segment_index:    tick as usize / 2,
            distance_along_m: tick as f64 * 1.4,
        }
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let path = dir.path().join("trace.csv");
        let mut w = CsvTraceWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "lon", "lat", "segment", "distance_m"]);
    }

    #[test]
    fn csv_position_round_trip() {
        let dir = tmp();
        let path = dir.path().join("trace.csv");
        let mut w = CsvTraceWriter::new(&path).unwrap();
        for tick in 1..=3 {
            w.write_position(&row(tick)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "1"); // tick
        assert_eq!(&read_rows[2][0], "3");
        assert_eq!(&read_rows[1][3], "1"); // segment 2/2
        let lat: f64 = read_rows[0][2].parse().unwrap();
        assert_eq!(lat, 48.85);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(&dir.path().join("trace.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_missing_parent_dir_fails() {
        let dir = tmp();
        let result = CsvTraceWriter::new(&dir.path().join("nope").join("trace.csv"));
        assert!(result.is_err());
    }
}

// ── GeoJSON tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod geojson_tests {
    use tempfile::TempDir;

    use crate::geojson::GeoJsonTraceWriter;
    use crate::row::PositionRow;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(lon: f64, lat: f64) -> PositionRow {
        PositionRow { tick: 1, lon, lat, segment_index: 0, distance_along_m: 0.0 }
    }

    #[test]
    fn geojson_writes_line_string_on_finish() {
        let dir = tmp();
        let path = dir.path().join("trace.geojson");
        let mut w = GeoJsonTraceWriter::new(&path);
        w.write_position(&row(2.37, 48.90)).unwrap();
        w.write_position(&row(2.36, 48.88)).unwrap();
        assert!(!path.exists(), "nothing written before finish");
        w.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "LineString");
        assert_eq!(value["coordinates"][0][0], 2.37);
        assert_eq!(value["coordinates"][1][1], 48.88);
        assert_eq!(value["coordinates"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn geojson_accumulates_in_order() {
        let mut w = GeoJsonTraceWriter::new(std::path::Path::new("unused.geojson"));
        w.write_position(&row(1.0, 1.0)).unwrap();
        w.write_position(&row(2.0, 2.0)).unwrap();
        assert_eq!(w.coordinates(), &[[1.0, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn geojson_finish_idempotent() {
        let dir = tmp();
        let path = dir.path().join("trace.geojson");
        let mut w = GeoJsonTraceWriter::new(&path);
        w.write_position(&row(2.37, 48.90)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["coordinates"].as_array().unwrap().len(), 1);
    }
}

// ── Recorder tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder_tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use nav_core::{GeoPoint, SimulatorConfig};
    use nav_path::{PathIndex, PathProjection, RoutePath};
    use nav_sim::{PositionUpdate, RouteListener, RouteSimulator};

    use crate::csv::CsvTraceWriter;
    use crate::geojson::GeoJsonTraceWriter;
    use crate::recorder::TraceRecorder;
    use crate::row::PositionRow;
    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn update(tick: u64, lon: f64, lat: f64) -> PositionUpdate {
        let point = GeoPoint::new(lon, lat);
        PositionUpdate {
            tick,
            position: point,
            projection: PathProjection {
                segment_index:    0,
                point,
                distance_along_m: tick as f64,
            },
        }
    }

    #[test]
    fn recorder_writes_each_update() {
        let mut recorder =
            TraceRecorder::new(GeoJsonTraceWriter::new(std::path::Path::new("unused")));
        recorder.on_position(&update(1, 2.37, 48.90));
        recorder.on_position(&update(2, 2.36, 48.88));
        assert!(recorder.take_error().is_none());
        assert_eq!(recorder.into_writer().coordinates().len(), 2);
    }

    #[test]
    fn recorder_finishes_on_complete() {
        let dir = tmp();
        let path = dir.path().join("trace.geojson");
        let mut recorder = TraceRecorder::new(GeoJsonTraceWriter::new(&path));
        let u = update(1, 2.37, 48.90);
        recorder.on_position(&u);
        recorder.on_complete(&u);
        assert!(recorder.take_error().is_none());
        assert!(path.exists());
    }

    #[test]
    fn recorder_finishes_on_stop() {
        let dir = tmp();
        let path = dir.path().join("trace.geojson");
        let mut recorder = TraceRecorder::new(GeoJsonTraceWriter::new(&path));
        recorder.on_position(&update(1, 2.37, 48.90));
        recorder.on_stop();
        assert!(path.exists(), "partial trace flushed on stop");
    }

    #[test]
    fn recorder_keeps_first_error() {
        struct FailingWriter;

        impl TraceWriter for FailingWriter {
            fn write_position(&mut self, row: &PositionRow) -> OutputResult<()> {
                Err(OutputError::Io(std::io::Error::other(format!(
                    "tick {}",
                    row.tick
                ))))
            }

            fn finish(&mut self) -> OutputResult<()> {
                Ok(())
            }
        }

        let mut recorder = TraceRecorder::new(FailingWriter);
        let errors = recorder.error_slot();
        recorder.on_position(&update(1, 0.0, 0.0));
        recorder.on_position(&update(2, 0.0, 0.0));

        let err = errors.take().expect("first error stored");
        assert!(err.to_string().contains("tick 1"), "got {err}");
        assert!(errors.take().is_none(), "slot drained by take");
    }

    #[test]
    fn recorder_traces_a_full_run() {
        let dir = tmp();
        let path = dir.path().join("trace.csv");

        let route = RoutePath::from_lon_lat(&[(0.0, 0.0), (0.0, 0.01)]);
        let index = Arc::new(PathIndex::build(&route).unwrap());
        // Nudged up so rounding cannot force a fifth tick.
        let step_m = index.total_length_m() / 4.0 * (1.0 + 1e-9);
        let config = SimulatorConfig {
            tick_interval_ms: 5,
            speed_mps:        step_m * 1000.0 / 5.0,
        };

        let recorder = TraceRecorder::new(CsvTraceWriter::new(&path).unwrap());
        let errors = recorder.error_slot();

        let mut sim = RouteSimulator::with_index(index, config);
        sim.add_listener(Box::new(recorder));
        sim.start().unwrap();
        sim.wait();

        assert!(errors.take().is_none());
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4, "one row per tick");
        assert_eq!(&rows[3][0], "4"); // final tick
        let final_lat: f64 = rows[3][2].parse().unwrap();
        assert_eq!(final_lat, 0.01, "trace ends at the route end");
    }
}
