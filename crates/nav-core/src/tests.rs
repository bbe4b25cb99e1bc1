//! Unit tests for nav-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(2.3488, 48.8534);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(2.35, 48.0);
        let b = GeoPoint::new(2.35, 49.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(2.3744, 48.9052);
        let b = GeoPoint::new(2.3488, 48.8534);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = GeoPoint::new(2.3744, 48.9052);
        let b = GeoPoint::new(2.3488, 48.8534);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        // out-of-range clamps to the endpoints
        assert_eq!(a.lerp(b, -0.5), a);
        assert_eq!(a.lerp(b, 1.5), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        let m = a.lerp(b, 0.5);
        assert!((m.lon - 1.0).abs() < 1e-12);
        assert!((m.lat - 2.0).abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(2.3488, 48.8534).to_string(), "(2.348800, 48.853400)");
    }
}

#[cfg(test)]
mod config {
    use crate::SimulatorConfig;

    #[test]
    fn defaults_are_explicit() {
        let cfg = SimulatorConfig::default();
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert!((cfg.speed_mps - 1.4).abs() < 1e-12);
    }

    #[test]
    fn distance_per_tick() {
        let cfg = SimulatorConfig { tick_interval_ms: 500, speed_mps: 10.0 };
        assert!((cfg.distance_per_tick_m() - 5.0).abs() < 1e-12);
    }
}
