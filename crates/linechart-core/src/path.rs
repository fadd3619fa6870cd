// File: crates/linechart-core/src/path.rs
// Summary: Resolution-independent path description with arc-length helpers for reveal animations.

use crate::geometry::Point2D;

/// Number of chords used to approximate a cubic segment when measuring it.
const CUBIC_FLATTEN_STEPS: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2D),
    LineTo(Point2D),
    CubicTo { c1: Point2D, c2: Point2D, to: Point2D },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point2D) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point2D) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: Point2D, c2: Point2D, to: Point2D) {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
    }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Number of drawable segments (everything except `MoveTo`).
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| !matches!(c, PathCommand::MoveTo(_))).count()
    }

    /// Total arc length; cubic segments are measured by flattening.
    pub fn length(&self) -> f64 {
        let mut cur = Point2D::default();
        let mut total = 0.0;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => cur = p,
                PathCommand::LineTo(p) => {
                    total += cur.distance(p);
                    cur = p;
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    total += cubic_length(cur, c1, c2, to);
                    cur = to;
                }
            }
        }
        total
    }

    /// Prefix of this path covering `len` units of arc length.
    pub fn reveal(&self, len: f64) -> Path {
        if len <= 0.0 || len.is_nan() {
            return Path::new();
        }
        if len >= self.length() - 1e-9 {
            return self.clone();
        }
        let mut out = Path::new();
        let mut remaining = len;
        let mut cur = Point2D::default();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.move_to(p);
                    cur = p;
                }
                PathCommand::LineTo(p) => {
                    let d = cur.distance(p);
                    if d <= remaining {
                        out.line_to(p);
                        remaining -= d;
                    } else {
                        out.line_to(cur.lerp(p, remaining / d));
                        return out;
                    }
                    cur = p;
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    let d = cubic_length(cur, c1, c2, to);
                    if d <= remaining {
                        out.cubic_to(c1, c2, to);
                        remaining -= d;
                    } else {
                        let t = cubic_t_at_length(cur, c1, c2, to, remaining);
                        let (a, b, end) = split_cubic(cur, c1, c2, to, t);
                        out.cubic_to(a, b, end);
                        return out;
                    }
                    cur = to;
                }
            }
        }
        out
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
                PathCommand::CubicTo { c1, c2, to } => PathCommand::CubicTo {
                    c1: c1.offset(dx, dy),
                    c2: c2.offset(dx, dy),
                    to: to.offset(dx, dy),
                },
            })
            .collect();
        Path { commands }
    }
}

#[inline]
fn cubic_point(p0: Point2D, c1: Point2D, c2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point2D::new(
        a * p0.x + b * c1.x + c * c2.x + d * p3.x,
        a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    )
}

fn cubic_length(p0: Point2D, c1: Point2D, c2: Point2D, p3: Point2D) -> f64 {
    let mut prev = p0;
    let mut total = 0.0;
    for i in 1..=CUBIC_FLATTEN_STEPS {
        let p = cubic_point(p0, c1, c2, p3, i as f64 / CUBIC_FLATTEN_STEPS as f64);
        total += prev.distance(p);
        prev = p;
    }
    total
}

fn cubic_t_at_length(p0: Point2D, c1: Point2D, c2: Point2D, p3: Point2D, target: f64) -> f64 {
    let mut prev = p0;
    let mut acc = 0.0;
    for i in 1..=CUBIC_FLATTEN_STEPS {
        let t = i as f64 / CUBIC_FLATTEN_STEPS as f64;
        let p = cubic_point(p0, c1, c2, p3, t);
        let d = prev.distance(p);
        if acc + d >= target {
            let frac = if d > 0.0 { (target - acc) / d } else { 0.0 };
            return t - (1.0 - frac) / CUBIC_FLATTEN_STEPS as f64;
        }
        acc += d;
        prev = p;
    }
    1.0
}

/// First half of a cubic split at `t` (de Casteljau): returns its two controls and end point.
fn split_cubic(p0: Point2D, c1: Point2D, c2: Point2D, p3: Point2D, t: f64) -> (Point2D, Point2D, Point2D) {
    let a = p0.lerp(c1, t);
    let b = c1.lerp(c2, t);
    let c = c2.lerp(p3, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    (a, ab, ab.lerp(bc, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline() -> Path {
        let mut p = Path::new();
        p.move_to(Point2D::new(0.0, 0.0));
        p.line_to(Point2D::new(3.0, 4.0));
        p.line_to(Point2D::new(3.0, 10.0));
        p
    }

    #[test]
    fn line_length_and_reveal() {
        let p = polyline();
        assert!((p.length() - 11.0).abs() < 1e-12);
        let head = p.reveal(2.5);
        assert_eq!(head.commands().len(), 2);
        let part = p.reveal(8.0);
        assert_eq!(part.commands().last(), Some(&PathCommand::LineTo(Point2D::new(3.0, 7.0))));
        assert_eq!(p.reveal(11.0), p);
        assert!(p.reveal(0.0).is_empty());
    }

    #[test]
    fn cubic_reveal_matches_requested_length() {
        let mut p = Path::new();
        p.move_to(Point2D::new(0.0, 0.0));
        p.cubic_to(Point2D::new(10.0, 0.0), Point2D::new(20.0, 30.0), Point2D::new(30.0, 30.0));
        let total = p.length();
        let part = p.reveal(total * 0.4);
        assert!((part.length() - total * 0.4).abs() < total * 0.02);
    }
}
