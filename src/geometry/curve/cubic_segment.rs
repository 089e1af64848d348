use crate::math::bernstein::{blend, blend_derivative};
use crate::math::{Point3, Vector3};

use super::BezierPoint;

/// A single cubic Bezier segment defined by four control points.
///
/// `p0` and `p3` are on the curve, `p1` and `p2` are the handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Builds the segment running from `start` to `end`, using the outgoing
    /// handle of `start` and the incoming handle of `end`.
    #[must_use]
    pub fn between(start: &BezierPoint, end: &BezierPoint) -> Self {
        Self::new(
            *start.anchor(),
            *start.handle_out(),
            *end.handle_in(),
            *end.anchor(),
        )
    }

    /// Returns the control polygon as an array.
    #[must_use]
    pub fn control_points(&self) -> [Point3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Evaluates the segment at local parameter `t` in `[0, 1]`.
    ///
    /// `t = 0` yields `p0` and `t = 1` yields `p3` exactly.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        blend(&self.control_points(), t)
    }

    /// First derivative with respect to the local parameter.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector3 {
        blend_derivative(&self.control_points(), t)
    }

    /// Splits the segment at `t` using de Casteljau subdivision.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let q0 = self.p0.lerp(&self.p1, t);
        let q1 = self.p1.lerp(&self.p2, t);
        let q2 = self.p2.lerp(&self.p3, t);
        let r0 = q0.lerp(&q1, t);
        let r1 = q1.lerp(&q2, t);
        let mid = r0.lerp(&r1, t);
        (
            Self::new(self.p0, q0, r0, mid),
            Self::new(mid, r1, q2, self.p3),
        )
    }

    /// Straight-line distance between the end points.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.p3 - self.p0).norm()
    }

    /// Largest second difference of the control polygon.
    ///
    /// Zero for a segment whose control points are evenly spaced on a line.
    #[must_use]
    pub fn flatness(&self) -> f64 {
        let d1 = (self.p0.coords - self.p1.coords * 2.0 + self.p2.coords).norm();
        let d2 = (self.p1.coords - self.p2.coords * 2.0 + self.p3.coords).norm();
        d1.max(d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicSegment {
        CubicSegment::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
            Point3::new(6.0, 4.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
        )
    }

    #[test]
    fn evaluate_midpoint_of_symmetric_arch() {
        let p = arch().evaluate(0.5);
        assert_relative_eq!(p, Point3::new(3.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn split_halves_meet_at_curve_point() {
        let seg = arch();
        let (left, right) = seg.split(0.3);
        let on_curve = seg.evaluate(0.3);
        assert_relative_eq!(left.p3, on_curve, epsilon = 1e-12);
        assert_relative_eq!(right.p0, on_curve, epsilon = 1e-12);
        // Each half traces the matching part of the parent segment.
        assert_relative_eq!(left.evaluate(0.5), seg.evaluate(0.15), epsilon = 1e-12);
        assert_relative_eq!(right.evaluate(0.5), seg.evaluate(0.65), epsilon = 1e-12);
    }

    #[test]
    fn between_uses_outgoing_then_incoming_handle() {
        let a = BezierPoint::new(
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        );
        let b = BezierPoint::new(
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        );
        let seg = CubicSegment::between(&a, &b);
        assert_eq!(seg.p1, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(seg.p2, Point3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn flatness_of_straight_uniform_segment_is_zero() {
        let seg = CubicSegment::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        );
        assert!(seg.flatness() < 1e-12);
        assert!(arch().flatness() > 1.0);
    }

    #[test]
    fn chord_ignores_handles() {
        assert_relative_eq!(arch().chord_length(), 6.0);
    }
}
