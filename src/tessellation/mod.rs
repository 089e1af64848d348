mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::error::{Result, TessellationError};
use crate::math::Point3;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of line segments per curve segment.
    pub min_segments: usize,
    /// Maximum number of line segments per curve segment.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters can drive a tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] if the tolerance is not
    /// a positive finite number, `min_segments` is zero, or
    /// `min_segments > max_segments`.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 {
            return Err(
                TessellationError::InvalidParameters("min_segments must be at least 1".into())
                    .into(),
            );
        }
        if self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "min_segments ({}) exceeds max_segments ({})",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Sum of the distances between consecutive vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
