//! Builds a small 2D hill curve and prints positions and cached heights.
//!
//! Usage:
//! ```text
//! cargo run --example sample_curve             # 11 samples
//! cargo run --example sample_curve -- 21       # custom sample count
//! RUST_LOG=polybezier=debug cargo run --example sample_curve
//! ```

use polybezier::geometry::{BezierCurve, CurveParams};
use polybezier::math::Point2;
use polybezier::operations::query::{BoundingBox, Length};
use polybezier::tessellation::{TessellateCurve, TessellationParams};
use polybezier::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polybezier.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polybezier=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sample_curve=info".parse().unwrap_or_default())
        .add_directive("polybezier=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let samples: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|&n| n >= 2)
        .unwrap_or(11);

    let mut curve = BezierCurve::with_params(CurveParams {
        cache_resolution: 64,
        ..CurveParams::default()
    })?;
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
    curve.rebuild_cache()?;

    tracing::info!(
        control_points = curve.control_point_count(),
        anchor_length = curve.total_length(),
        "curve ready"
    );

    println!("{:>6}  {:>24}  {:>8}", "a", "point", "height");
    for i in 0..samples {
        let a = f64::from(i) / f64::from(samples - 1);
        let p = curve.point_at(a)?;
        let h = curve.height_at(a)?;
        println!("{a:>6.3}  ({:>6.3}, {:>6.3}, {:>6.3})  {h:>8.4}", p.x, p.y, p.z);
    }

    let arc_length = Length::default().execute(&curve)?;
    let aabb = BoundingBox::new(TessellationParams::default()).execute(&curve)?;
    let polyline = TessellateCurve::new(TessellationParams::default()).execute(&curve)?;
    println!();
    println!("arc length  {arc_length:.4}");
    println!("bounds      {:?} .. {:?}", aabb.min.coords.as_slice(), aabb.max.coords.as_slice());
    println!("polyline    {} vertices", polyline.points.len());
    Ok(())
}
