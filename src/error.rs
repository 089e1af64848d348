use thiserror::Error;

/// Top-level error type for the polybezier crate.
#[derive(Debug, Error)]
pub enum PolybezierError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by a [`BezierCurve`](crate::geometry::BezierCurve).
#[derive(Debug, Error)]
pub enum CurveError {
    /// A control point was requested past the end of the curve.
    #[error("control point index {index} is out of range (curve has {count} points)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The curve was evaluated before it had enough control points to form a segment.
    #[error("curve has {count} control point(s); evaluation requires at least 2")]
    Precomposition { count: usize },

    #[error("invalid curve parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolybezierError`].
pub type Result<T> = std::result::Result<T, PolybezierError>;
