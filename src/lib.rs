//! Piecewise cubic Bezier curves for animation and layout.
//!
//! A [`BezierCurve`] is built by appending control points and is evaluated
//! with a single normalized parameter covering the whole curve. Heights are
//! served from a per-curve cache for constant-time lookups.
//!
//! ```
//! use polybezier::geometry::BezierCurve;
//! use polybezier::math::Point3;
//!
//! let mut curve = BezierCurve::new();
//! curve.add_anchor(Point3::new(0.0, 0.0, 0.0));
//! curve.add_anchor(Point3::new(10.0, 0.0, 0.0));
//! let mid = curve.point_at(0.5)?;
//! assert!((mid.x - 5.0).abs() < 1e-12);
//! # Ok::<(), polybezier::PolybezierError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{PolybezierError, Result};
pub use geometry::{BezierCurve, BezierPoint, Curve};
