use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("route path needs at least two points, got {got}")]
    TooFewPoints { got: usize },

    #[error("route path has zero total length (all points coincide)")]
    ZeroLength,

    #[error("geometry type is not LineString, got {got:?}")]
    NotALineString { got: String },

    #[error("GeoJSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PathResult<T> = Result<T, PathError>;
