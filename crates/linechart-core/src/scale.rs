// File: crates/linechart-core/src/scale.rs
// Summary: Categorical (X) point scale and linear value (Y) scale, plus the scale builder.

use std::collections::HashMap;

use crate::record::{x_label, y_value, Record};
use crate::types::{Insets, Viewport};

/// Headroom multiplier applied to the largest value so the top point is never flush with the edge.
pub const Y_HEADROOM: f64 = 1.1;
/// Upper domain bound used when no value is positive.
pub const FALLBACK_Y_UPPER: f64 = 1.0;

/// Horizontal point scale: evenly spaced positions for an ordered set of distinct categories.
#[derive(Clone, Debug, PartialEq)]
pub struct PointScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    start: f64,
    step: f64,
}

impl PointScale {
    /// Build from category values; duplicates are dropped keeping first-seen order.
    /// `padding` is expressed in steps and applied on both outer edges.
    pub fn new<I, S>(values: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for v in values {
            let v = v.into();
            if !index.contains_key(&v) {
                index.insert(v.clone(), domain.len());
                domain.push(v);
            }
        }
        let n = domain.len() as f64;
        let padding = padding.max(0.0);
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - 1.0 + padding * 2.0).max(1.0);
        // center the used span inside the range
        let start = r0 + (r1 - r0 - step * (n - 1.0).max(0.0)) * 0.5;
        Self { domain, index, start, step }
    }

    #[inline]
    pub fn map(&self, value: &str) -> Option<f64> {
        self.index_of(value).map(|i| self.position(i))
    }

    #[inline]
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
}

/// Vertical linear scale mapping a value domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut s = Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 };
        // Only a collapsed domain is widened; tiny but distinct bounds are kept as given.
        let span = s.d1 - s.d0;
        if span == 0.0 || !span.is_finite() {
            s.d1 = s.d0 + 1.0;
        }
        s
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }

    /// Round-number ticks inside the domain, aiming for roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        let step = (hi - lo) / count as f64;
        let power = step.log10().floor() as i32;
        let error = step / 10f64.powi(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        // Integer tick indices keep decimal ticks like 0.3 exact.
        if power >= 0 {
            let inc = factor * 10f64.powi(power);
            let (i0, i1) = ((lo / inc).ceil() as i64, (hi / inc).floor() as i64);
            (i0..=i1).map(|i| i as f64 * inc).collect()
        } else {
            let inc = 10f64.powi(-power) / factor;
            let (i0, i1) = ((lo * inc).ceil() as i64, (hi * inc).floor() as i64);
            (i0..=i1).map(|i| i as f64 / inc).collect()
        }
    }
}

/// Scales derived from one dataset and one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    pub x: PointScale,
    pub y: LinearScale,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Largest value across all series (missing values count as 0).
    pub y_max: f64,
}

impl Scales {
    /// Derive both scales. Returns `None` when there is nothing to draw: no record carries an
    /// x value, or the viewport leaves no inner area.
    pub fn build(
        data: &[Record],
        x_key: &str,
        y_keys: &[String],
        viewport: Viewport,
        insets: &Insets,
        x_padding: f64,
    ) -> Option<Self> {
        let (inner_width, inner_height) = viewport.inner(insets)?;
        let labelled: Vec<(String, &Record)> =
            data.iter().filter_map(|r| x_label(r, x_key).map(|x| (x, r))).collect();
        if labelled.is_empty() {
            return None;
        }
        let y_max = labelled
            .iter()
            .flat_map(|(_, r)| y_keys.iter().map(move |k| y_value(r, k).unwrap_or(0.0)))
            .fold(0.0_f64, f64::max);
        let upper = if y_max > 0.0 { y_max * Y_HEADROOM } else { FALLBACK_Y_UPPER };

        let x = PointScale::new(labelled.into_iter().map(|(x, _)| x), (0.0, inner_width), x_padding);
        let y = LinearScale::new((0.0, upper), (inner_height, 0.0));
        Some(Self { x, y, inner_width, inner_height, y_max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scale_centers_single_value() {
        let s = PointScale::new(["only"], (0.0, 300.0), 0.5);
        assert_eq!(s.map("only"), Some(150.0));
        let s0 = PointScale::new(["only"], (0.0, 300.0), 0.0);
        assert_eq!(s0.map("only"), Some(150.0));
    }

    #[test]
    fn point_scale_dedupes_first_seen() {
        let s = PointScale::new(["b", "a", "b", "c"], (0.0, 300.0), 0.5);
        assert_eq!(s.domain(), &["b".to_string(), "a".to_string(), "c".to_string()]);
        assert_eq!(s.map("b"), Some(50.0));
        assert_eq!(s.map("a"), Some(150.0));
        assert_eq!(s.map("c"), Some(250.0));
        assert_eq!(s.map("zzz"), None);
    }

    #[test]
    fn point_scale_without_padding_spans_range() {
        let s = PointScale::new(["a", "b", "c"], (0.0, 100.0), 0.0);
        assert_eq!(s.position(0), 0.0);
        assert_eq!(s.position(2), 100.0);
    }

    #[test]
    fn linear_ticks_are_round_numbers() {
        let s = LinearScale::new((0.0, 22.0), (350.0, 0.0));
        assert_eq!(s.ticks(5), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        let small = LinearScale::new((0.0, 1.1), (100.0, 0.0));
        assert_eq!(small.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn linear_widens_only_a_collapsed_domain() {
        let flat = LinearScale::new((3.0, 3.0), (100.0, 0.0));
        assert_eq!(flat.domain(), (3.0, 4.0));
        let tiny = LinearScale::new((0.0, 5.5e-13), (100.0, 0.0));
        assert_eq!(tiny.domain(), (0.0, 5.5e-13));
        assert_eq!(tiny.map(5.5e-13), 0.0);
    }
}
