pub mod curve;

pub use curve::{
    BezierCurve, BezierPoint, CubicSegment, Curve, CurveDomain, CurveParams,
    DEFAULT_CACHE_RESOLUTION,
};
