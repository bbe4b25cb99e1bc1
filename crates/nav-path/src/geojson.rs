//! GeoJSON `LineString` parsing and serialization.
//!
//! The surrounding application sources its route from a directions API that
//! returns a GeoJSON geometry (`[lon, lat]` coordinate order) and feeds the
//! traveled portion back to a map line layer in the same form.  Only the
//! `LineString` geometry object is handled here — full Feature/
//! FeatureCollection wrapping is the collaborator's concern.

use nav_core::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::{PathError, PathResult, RoutePath};

#[derive(Serialize, Deserialize)]
struct LineString {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<[f64; 2]>,
}

/// Parse a GeoJSON `LineString` geometry object into a [`RoutePath`].
///
/// ```
/// use nav_path::geojson::parse_line_string;
///
/// let path = parse_line_string(
///     r#"{"type":"LineString","coordinates":[[2.3744,48.9052],[2.3488,48.8534]]}"#,
/// ).unwrap();
/// assert_eq!(path.len(), 2);
/// ```
pub fn parse_line_string(json: &str) -> PathResult<RoutePath> {
    let geometry: LineString = serde_json::from_str(json)?;
    if geometry.kind != "LineString" {
        return Err(PathError::NotALineString { got: geometry.kind });
    }
    Ok(RoutePath::new(
        geometry
            .coordinates
            .iter()
            .map(|&[lon, lat]| GeoPoint::new(lon, lat))
            .collect(),
    ))
}

/// Serialize points as a GeoJSON `LineString` geometry object.
pub fn to_line_string(points: &[GeoPoint]) -> PathResult<String> {
    let geometry = LineString {
        kind: "LineString".to_string(),
        coordinates: points.iter().map(|p| [p.lon, p.lat]).collect(),
    };
    Ok(serde_json::to_string(&geometry)?)
}

impl RoutePath {
    /// Shorthand for [`parse_line_string`].
    pub fn from_geojson(json: &str) -> PathResult<Self> {
        parse_line_string(json)
    }

    /// Shorthand for [`to_line_string`] over this path's points.
    pub fn to_geojson(&self) -> PathResult<String> {
        to_line_string(self.points())
    }
}
