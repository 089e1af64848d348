use tracing::{debug, trace};

use crate::error::{CurveError, GeometryError, Result};
use crate::math::{to_3d, Point2, Point3, Vector3, TOLERANCE};

use super::height_cache::HeightCache;
use super::{BezierPoint, CubicSegment, Curve, CurveDomain, CurveParams};

/// A piecewise cubic Bezier curve through an ordered list of control points.
///
/// Consecutive control points form one cubic segment each. The curve is
/// evaluated with a single normalized parameter `a` in `[0, 1]` covering the
/// whole curve; `a` is distributed over the segments in proportion to the
/// straight-line distance between their anchors, so short segments take a
/// short share of the parameter range.
///
/// Heights (one coordinate of the curve point, `y` by default) are also
/// available through a fixed-resolution cache for fast, quantized lookups.
/// Any insertion marks the cache dirty and the next [`height_at`](Self::height_at)
/// rebuilds it. Call [`rebuild_cache`](Self::rebuild_cache) after a batch of
/// insertions to pay that cost up front.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    points: Vec<BezierPoint>,
    /// `segment_lengths[i]` is the anchor distance between points `i` and `i + 1`.
    segment_lengths: Vec<f64>,
    params: CurveParams,
    height_cache: HeightCache,
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierCurve {
    /// Creates an empty curve with default [`CurveParams`].
    #[must_use]
    pub fn new() -> Self {
        let params = CurveParams::default();
        Self {
            points: Vec::new(),
            segment_lengths: Vec::new(),
            height_cache: HeightCache::new(params.cache_resolution),
            params,
        }
    }

    /// Creates an empty curve with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn with_params(params: CurveParams) -> Result<Self> {
        params.validate()?;
        debug!(
            cache_resolution = params.cache_resolution,
            height_axis = ?params.height_axis,
            "creating bezier curve"
        );
        Ok(Self {
            points: Vec::new(),
            segment_lengths: Vec::new(),
            height_cache: HeightCache::new(params.cache_resolution),
            params,
        })
    }

    /// Returns the curve parameters.
    #[must_use]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Appends a control point after the last one.
    pub fn push(&mut self, point: BezierPoint) {
        if let Some(last) = self.points.last() {
            let length = (point.anchor() - last.anchor()).norm();
            self.segment_lengths.push(length);
            trace!(
                segment = self.segment_lengths.len() - 1,
                length,
                "added curve segment"
            );
        }
        self.points.push(point);
        self.height_cache.invalidate();
    }

    /// Appends a control point with explicit handles.
    pub fn add_control_point(&mut self, handle_in: Point3, anchor: Point3, handle_out: Point3) {
        self.push(BezierPoint::new(handle_in, anchor, handle_out));
    }

    /// Appends a control point whose handles coincide with `anchor`.
    pub fn add_anchor(&mut self, anchor: Point3) {
        self.push(BezierPoint::corner(anchor));
    }

    /// Appends a control point with explicit handles in the `z = 0` plane.
    pub fn add_control_point_2d(&mut self, handle_in: Point2, anchor: Point2, handle_out: Point2) {
        self.push(BezierPoint::new_2d(handle_in, anchor, handle_out));
    }

    /// Appends a control point in the `z = 0` plane with handles on the anchor.
    pub fn add_anchor_2d(&mut self, anchor: Point2) {
        self.add_anchor(to_3d(anchor));
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::IndexOutOfRange`] if `index >= control_point_count()`.
    pub fn control_point(&self, index: usize) -> Result<&BezierPoint> {
        self.points.get(index).ok_or_else(|| {
            CurveError::IndexOutOfRange {
                index,
                count: self.points.len(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn control_points(&self) -> &[BezierPoint] {
        &self.points
    }

    /// Number of cubic segments (one less than the number of control points).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    /// Anchor-to-anchor distance of each segment.
    #[must_use]
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    /// Sum of the anchor-to-anchor distances.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segment_lengths.iter().sum()
    }

    /// Returns segment `index`, running from control point `index` to `index + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::IndexOutOfRange`] if there is no such segment.
    pub fn segment(&self, index: usize) -> Result<CubicSegment> {
        match (self.points.get(index), self.points.get(index + 1)) {
            (Some(start), Some(end)) => Ok(CubicSegment::between(start, end)),
            _ => Err(CurveError::IndexOutOfRange {
                index,
                count: self.segment_count(),
            }
            .into()),
        }
    }

    /// Maps the normalized parameter `a` to a segment index and a local
    /// parameter within that segment.
    ///
    /// Finite values outside `[0, 1]` are clamped. Segments whose anchors
    /// coincide receive no share of the range. If every anchor coincides the
    /// range is split evenly between segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has fewer than two control points or `a`
    /// is not finite.
    pub fn locate(&self, a: f64) -> Result<(usize, f64)> {
        self.ensure_evaluable()?;
        locate_in(&self.segment_lengths, a)
    }

    /// Returns the point at normalized parameter `a` along the whole curve.
    ///
    /// `a = 0` gives the first anchor and `a = 1` the last anchor exactly.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Precomposition`] if the curve has fewer than two
    /// control points, or [`GeometryError::ParameterOutOfRange`] if `a` is not finite.
    pub fn point_at(&self, a: f64) -> Result<Point3> {
        self.ensure_evaluable()?;
        evaluate_in(&self.points, &self.segment_lengths, a)
    }

    /// Evaluates the cubic running from `start` to `end` at local parameter `t`.
    #[must_use]
    pub fn point_between(t: f64, start: &BezierPoint, end: &BezierPoint) -> Point3 {
        CubicSegment::between(start, end).evaluate(t)
    }

    /// Refills the height cache from the current control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Precomposition`] if the curve has fewer than two
    /// control points; the cache stays dirty.
    pub fn rebuild_cache(&mut self) -> Result<()> {
        self.ensure_evaluable()?;
        let axis = self.params.height_axis;
        let points = self.points.as_slice();
        let segment_lengths = self.segment_lengths.as_slice();
        self.height_cache
            .rebuild(|a| Ok(axis.component(&evaluate_in(points, segment_lengths, a)?)))?;
        debug!(
            resolution = self.height_cache.resolution(),
            control_points = points.len(),
            "rebuilt height cache"
        );
        Ok(())
    }

    /// Returns the cached height nearest to normalized parameter `a`.
    ///
    /// The value is quantized to the cache resolution. A dirty cache is
    /// rebuilt first.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Precomposition`] if the curve has fewer than two
    /// control points, or [`GeometryError::ParameterOutOfRange`] if `a` is not finite.
    pub fn height_at(&mut self, a: f64) -> Result<f64> {
        let a = normalize_parameter(a)?;
        if self.height_cache.is_dirty() {
            self.rebuild_cache()?;
        }
        match self.height_cache.lookup(a) {
            Some(height) => Ok(height),
            None => Err(CurveError::Precomposition {
                count: self.points.len(),
            }
            .into()),
        }
    }

    /// Returns whether the next [`height_at`](Self::height_at) will rebuild the cache.
    #[must_use]
    pub fn is_cache_dirty(&self) -> bool {
        self.height_cache.is_dirty()
    }

    /// Normalized parameter of each height cache sample.
    pub fn cache_parameters(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.height_cache.resolution()).map(move |i| self.height_cache.sample_parameter(i))
    }

    fn ensure_evaluable(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(CurveError::Precomposition {
                count: self.points.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Segment index and local parameter for normalized `a`.
///
/// `segment_lengths` must be non-empty.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn locate_in(segment_lengths: &[f64], a: f64) -> Result<(usize, f64)> {
    let a = normalize_parameter(a)?;
    let last = segment_lengths.len() - 1;

    if a <= 0.0 {
        return Ok((0, 0.0));
    }
    if a >= 1.0 {
        return Ok((last, 1.0));
    }

    let total: f64 = segment_lengths.iter().sum();
    if total < TOLERANCE {
        let scaled = a * segment_lengths.len() as f64;
        let index = (scaled.floor() as usize).min(last);
        return Ok((index, (scaled - index as f64).clamp(0.0, 1.0)));
    }

    let target = a * total;
    let mut start = 0.0;
    for (index, &length) in segment_lengths.iter().enumerate() {
        let end = start + length;
        if target < end || index == last {
            let t = if length < TOLERANCE {
                0.0
            } else {
                ((target - start) / length).clamp(0.0, 1.0)
            };
            return Ok((index, t));
        }
        start = end;
    }
    Ok((last, 1.0))
}

/// Point at normalized `a`; `points` must hold at least two control points.
fn evaluate_in(points: &[BezierPoint], segment_lengths: &[f64], a: f64) -> Result<Point3> {
    let (index, t) = locate_in(segment_lengths, a)?;
    Ok(CubicSegment::between(&points[index], &points[index + 1]).evaluate(t))
}

/// Rejects NaN and infinities, clamps everything else to `[0, 1]`.
fn normalize_parameter(a: f64) -> Result<f64> {
    if !a.is_finite() {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "a",
            value: a,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    Ok(a.clamp(0.0, 1.0))
}

impl Curve for BezierCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.point_at(t)
    }

    /// Unit direction of travel at `t`.
    ///
    /// Collapsed handles give a zero derivative at the segment ends; the
    /// chord direction is used there instead.
    fn tangent(&self, t: f64) -> Result<Vector3> {
        let (index, local) = self.locate(t)?;
        let segment = self.segment(index)?;
        let derivative = segment.derivative(local);
        let direction = if derivative.norm() < TOLERANCE {
            segment.p3 - segment.p0
        } else {
            derivative
        };
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(direction / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => {
                (first.anchor() - last.anchor()).norm() < TOLERANCE
            }
            _ => false,
        }
    }
}

impl Extend<BezierPoint> for BezierCurve {
    fn extend<I: IntoIterator<Item = BezierPoint>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl FromIterator<BezierPoint> for BezierCurve {
    fn from_iter<I: IntoIterator<Item = BezierPoint>>(iter: I) -> Self {
        let mut curve = Self::new();
        curve.extend(iter);
        curve
    }
}
