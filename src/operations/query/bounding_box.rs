use crate::error::Result;
use crate::geometry::BezierCurve;
use crate::math::Point3;
use crate::tessellation::{TessellateCurve, TessellationParams};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing all `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: acc.min.inf(p),
                max: acc.max.sup(p),
            },
        ))
    }

    /// Returns whether `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

/// Computes the axis-aligned bounding box of a Bezier curve.
///
/// The box is taken over a tessellation of the curve, so it is tight to
/// within the tessellation tolerance rather than enclosing the handles.
pub struct BoundingBox {
    params: TessellationParams,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has fewer than two control points or the
    /// tessellation parameters are invalid.
    pub fn execute(&self, curve: &BezierCurve) -> Result<Aabb> {
        let polyline = TessellateCurve::new(self.params).execute(curve)?;
        // A successful tessellation always yields at least two points.
        Ok(Aabb::from_points(&polyline.points).unwrap_or(Aabb {
            min: Point3::origin(),
            max: Point3::origin(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn hill_box_spans_anchors() {
        let mut curve = BezierCurve::new();
        curve.add_control_point_2d(
            Point2::new(-2.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        curve.add_control_point_2d(
            Point2::new(3.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(7.0, 5.0),
        );
        curve.add_control_point_2d(
            Point2::new(8.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(12.0, 0.0),
        );
        let aabb = BoundingBox::new(TessellationParams::default())
            .execute(&curve)
            .unwrap();
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(10.0, 5.0, 0.0));
    }

    #[test]
    fn box_excludes_far_handles() {
        // The handles reach y = 4, the curve only reaches y = 3.
        let mut curve = BezierCurve::new();
        curve.add_control_point_2d(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 4.0),
        );
        curve.add_control_point_2d(
            Point2::new(6.0, 4.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 0.0),
        );
        let aabb = BoundingBox::new(TessellationParams::default())
            .execute(&curve)
            .unwrap();
        assert!((aabb.max.y - 3.0).abs() < 0.01);
        assert!(aabb.contains(&curve.point_at(0.5).unwrap()));
        assert!(!aabb.contains(&Point3::new(3.0, 4.0, 0.0)));
    }

    #[test]
    fn from_points_of_nothing_is_none() {
        assert_eq!(Aabb::from_points(&Vec::<Point3>::new()), None);
    }
}
