//! Cubic Bernstein basis utilities.
//!
//! The cubic basis polynomials are:
//! - `b0(t) = (1-t)^3`
//! - `b1(t) = 3(1-t)^2 t`
//! - `b2(t) = 3(1-t) t^2`
//! - `b3(t) = t^3`
//!
//! They are non-negative on `[0, 1]` and sum to one.

use super::{Point3, Vector3};

/// Returns the four cubic Bernstein weights at `t`.
#[must_use]
pub fn cubic_weights(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t]
}

/// Returns the weights of the cubic derivative at `t`, applied to the
/// control-polygon differences `p1 - p0`, `p2 - p1`, `p3 - p2`.
#[must_use]
pub fn cubic_derivative_weights(t: f64) -> [f64; 3] {
    let s = 1.0 - t;
    [3.0 * s * s, 6.0 * s * t, 3.0 * t * t]
}

/// Blends four control points with the cubic Bernstein basis.
#[must_use]
pub fn blend(p: &[Point3; 4], t: f64) -> Point3 {
    let w = cubic_weights(t);
    // Weighted sum of position vectors; zero weights contribute exact zeros.
    let v = p[0].coords * w[0] + p[1].coords * w[1] + p[2].coords * w[2] + p[3].coords * w[3];
    Point3::from(v)
}

/// First derivative of the cubic defined by `p` at `t`.
#[must_use]
pub fn blend_derivative(p: &[Point3; 4], t: f64) -> Vector3 {
    let w = cubic_derivative_weights(t);
    (p[1] - p[0]) * w[0] + (p[2] - p[1]) * w[1] + (p[3] - p[2]) * w[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn weights_partition_unity() {
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let sum: f64 = cubic_weights(t).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn weights_at_endpoints() {
        assert_eq!(cubic_weights(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cubic_weights(1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn blend_endpoints_are_exact() {
        let p = [
            Point3::new(0.3, 1.7, -2.1),
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(-4.0, 2.0, 9.0),
            Point3::new(7.1, -0.2, 3.3),
        ];
        assert_eq!(blend(&p, 0.0), p[0]);
        assert_eq!(blend(&p, 1.0), p[3]);
    }

    #[test]
    fn derivative_of_uniform_line_is_constant() {
        // Control points evenly spaced on a line give a linear parameterization.
        let p = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        for t in [0.0, 0.25, 0.5, 1.0] {
            let d = blend_derivative(&p, t);
            assert_abs_diff_eq!(d, Vector3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
        }
    }
}
