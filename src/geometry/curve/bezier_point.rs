use crate::math::{to_3d, Point2, Point3};

/// A control point of a piecewise cubic curve.
///
/// The anchor lies on the curve. The two handles shape how the curve
/// enters (`handle_in`) and leaves (`handle_out`) the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    handle_in: Point3,
    anchor: Point3,
    handle_out: Point3,
}

impl BezierPoint {
    /// Creates a control point from its incoming handle, anchor and outgoing handle.
    #[must_use]
    pub fn new(handle_in: Point3, anchor: Point3, handle_out: Point3) -> Self {
        Self {
            handle_in,
            anchor,
            handle_out,
        }
    }

    /// Creates a control point whose handles coincide with the anchor.
    #[must_use]
    pub fn corner(anchor: Point3) -> Self {
        Self::new(anchor, anchor, anchor)
    }

    /// Creates a control point in the `z = 0` plane.
    #[must_use]
    pub fn new_2d(handle_in: Point2, anchor: Point2, handle_out: Point2) -> Self {
        Self::new(to_3d(handle_in), to_3d(anchor), to_3d(handle_out))
    }

    #[must_use]
    pub fn handle_in(&self) -> &Point3 {
        &self.handle_in
    }

    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    #[must_use]
    pub fn handle_out(&self) -> &Point3 {
        &self.handle_out
    }

    /// Returns whether both handles sit on the anchor.
    #[must_use]
    pub fn is_corner(&self) -> bool {
        self.handle_in == self.anchor && self.handle_out == self.anchor
    }
}
