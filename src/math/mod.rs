pub mod bernstein;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A coordinate axis of 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn component(self, point: &Point3) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }
}

/// Lifts a 2D point into the `z = 0` plane.
#[must_use]
pub fn to_3d(p: Point2) -> Point3 {
    Point3::new(p.x, p.y, 0.0)
}
