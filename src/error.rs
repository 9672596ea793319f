use thiserror::Error;

/// Errors produced by geometric constructions and queries.
///
/// Degenerate input is an expected, recoverable condition in this crate:
/// every query whose mathematical answer does not exist for the given input
/// (zero-length vector, collinear or coplanar points, parallel vectors)
/// returns an error variant rather than NaN, infinity, or a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
