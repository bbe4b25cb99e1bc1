//! `nav-path` — route geometry and progress projection for navsim.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`path`]      | `RoutePath` — ordered point sequence; `PathProjection`        |
//! | [`index`]     | `PathIndex` — build-once nearest-point and progress queries   |
//! | [`geojson`]   | GeoJSON `LineString` parsing and serialization                |
//! | [`error`]     | `PathError`, `PathResult<T>`                                  |
//!
//! # Distance semantics
//!
//! Every distance in this crate — segment lengths, projection offsets,
//! cumulative progress — is a haversine great-circle distance in metres
//! ([`GeoPoint::distance_m`][nav_core::GeoPoint::distance_m]).  The
//! orthogonal-projection parameter is computed in a local equirectangular
//! frame so that "nearest segment" agrees with the haversine metric; no
//! observable value mixes planar and great-circle measures.

pub mod error;
pub mod geojson;
pub mod index;
pub mod path;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PathError, PathResult};
pub use index::PathIndex;
pub use path::{PathProjection, RoutePath};
