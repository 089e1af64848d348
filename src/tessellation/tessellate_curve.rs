use tracing::debug;

use crate::error::{CurveError, Result};
use crate::geometry::{BezierCurve, CubicSegment};

use super::{Polyline, TessellationParams};

/// Tessellates a Bezier curve into a polyline.
///
/// Every cubic segment is cut into `n` pieces of equal local parameter
/// length. `n` comes from the segment's flatness: for a cubic,
/// `n >= sqrt(3/4 * flatness / tolerance)` keeps the chords within
/// `tolerance` of the curve. `n` is then clamped to
/// `[min_segments, max_segments]`.
pub struct TessellateCurve {
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// The polyline starts at the first anchor, ends at the last anchor and
    /// passes through every anchor in between.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the curve has fewer
    /// than two control points.
    pub fn execute(&self, curve: &BezierCurve) -> Result<Polyline> {
        self.params.validate()?;
        if curve.control_point_count() < 2 {
            return Err(CurveError::Precomposition {
                count: curve.control_point_count(),
            }
            .into());
        }

        let mut points = Vec::new();
        for index in 0..curve.segment_count() {
            let segment = curve.segment(index)?;
            if index == 0 {
                points.push(segment.p0);
            }
            let n = self.subdivision_count(&segment);
            for j in 1..=n {
                #[allow(clippy::cast_precision_loss)]
                let t = j as f64 / n as f64;
                points.push(segment.evaluate(t));
            }
        }

        debug!(
            segments = curve.segment_count(),
            vertices = points.len(),
            tolerance = self.params.tolerance,
            "tessellated curve"
        );
        Ok(Polyline { points })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn subdivision_count(&self, segment: &CubicSegment) -> usize {
        let n = (0.75 * segment.flatness() / self.params.tolerance).sqrt().ceil();
        // Saturating cast: huge or non-finite flatness lands on max_segments.
        let n = if n.is_finite() { n as usize } else { usize::MAX };
        n.clamp(self.params.min_segments, self.params.max_segments)
    }
}
