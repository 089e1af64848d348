use crate::error::{CurveError, Result};
use crate::geometry::BezierCurve;

/// Approximates the arc length of a Bezier curve.
///
/// Each cubic segment is sampled at `samples_per_segment` evenly spaced local
/// parameters and the chords between samples are summed. The result is never
/// shorter than the anchor distances reported by
/// [`BezierCurve::total_length`], which ignore the bend of each segment.
pub struct Length {
    samples_per_segment: usize,
}

impl Default for Length {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Length {
    /// Creates a new `Length` query. At least one sample is always taken.
    #[must_use]
    pub fn new(samples_per_segment: usize) -> Self {
        Self {
            samples_per_segment: samples_per_segment.max(1),
        }
    }

    /// Executes the query, returning the curve length.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has fewer than two control points.
    pub fn execute(&self, curve: &BezierCurve) -> Result<f64> {
        if curve.control_point_count() < 2 {
            return Err(CurveError::Precomposition {
                count: curve.control_point_count(),
            }
            .into());
        }
        let n = self.samples_per_segment;
        let mut length = 0.0;
        for index in 0..curve.segment_count() {
            let segment = curve.segment(index)?;
            let mut previous = segment.p0;
            for j in 1..=n {
                #[allow(clippy::cast_precision_loss)]
                let t = j as f64 / n as f64;
                let p = segment.evaluate(t);
                length += (p - previous).norm();
                previous = p;
            }
        }
        Ok(length)
    }
}
