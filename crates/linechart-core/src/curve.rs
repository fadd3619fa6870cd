// File: crates/linechart-core/src/curve.rs
// Summary: Monotone cubic interpolation in x (Steffen tangents): never overshoots neighboring points.

use crate::geometry::Point2D;
use crate::path::Path;

#[inline]
fn secant(a: Point2D, b: Point2D) -> f64 {
    let h = b.x - a.x;
    if h.abs() < 1e-12 { 0.0 } else { (b.y - a.y) / h }
}

/// Per-point tangents. Interior tangents are bounded by twice the smaller neighboring secant
/// and are zero at local extrema; end tangents use the one-sided three-point estimate.
pub fn monotone_tangents(points: &[Point2D]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }
    if n == 2 {
        let s = secant(points[0], points[1]);
        return vec![s, s];
    }
    let mut m = vec![0.0; n];
    for i in 1..n - 1 {
        let (p0, p1, p2) = (points[i - 1], points[i], points[i + 1]);
        let (h0, h1) = (p1.x - p0.x, p2.x - p1.x);
        let (s0, s1) = (secant(p0, p1), secant(p1, p2));
        let p = if (h0 + h1).abs() < 1e-12 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
        let t = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        m[i] = if t.is_finite() { t } else { 0.0 };
    }
    m[0] = (3.0 * secant(points[0], points[1]) - m[1]) / 2.0;
    m[n - 1] = (3.0 * secant(points[n - 2], points[n - 1]) - m[n - 2]) / 2.0;
    m
}

/// Append one run of points to `path`: a lone marker position for one point, a straight
/// segment for two, cubic segments otherwise.
pub fn monotone_x(points: &[Point2D], path: &mut Path) {
    let Some(&first) = points.first() else { return };
    path.move_to(first);
    match points.len() {
        1 => {}
        2 => path.line_to(points[1]),
        _ => {
            let m = monotone_tangents(points);
            for i in 0..points.len() - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                path.cubic_to(
                    Point2D::new(a.x + dx, a.y + dx * m[i]),
                    Point2D::new(b.x - dx, b.y - dx * m[i + 1]),
                    b,
                );
            }
        }
    }
}
