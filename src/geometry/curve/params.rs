use crate::error::{CurveError, Result};
use crate::math::Axis;

/// Number of height samples cached per curve unless configured otherwise.
pub const DEFAULT_CACHE_RESOLUTION: usize = 100;

/// Parameters controlling a curve's height cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Number of evenly spaced samples in the height cache (at least 2).
    pub cache_resolution: usize,
    /// Coordinate read as the "height" of a curve point.
    pub height_axis: Axis,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            cache_resolution: DEFAULT_CACHE_RESOLUTION,
            height_axis: Axis::Y,
        }
    }
}

impl CurveParams {
    /// Checks that the parameters describe a usable cache.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if `cache_resolution < 2`;
    /// both ends of the curve must be sampled.
    pub fn validate(&self) -> Result<()> {
        if self.cache_resolution < 2 {
            return Err(CurveError::InvalidParameters(format!(
                "cache_resolution must be at least 2, got {}",
                self.cache_resolution
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolybezierError;

    #[test]
    fn default_params_are_valid() {
        let params = CurveParams::default();
        assert_eq!(params.cache_resolution, DEFAULT_CACHE_RESOLUTION);
        assert_eq!(params.height_axis, Axis::Y);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn single_sample_cache_is_rejected() {
        let params = CurveParams {
            cache_resolution: 1,
            ..CurveParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PolybezierError::Curve(CurveError::InvalidParameters(_)))
        ));
    }
}
