// File: crates/linechart-core/src/legend.rs
// Summary: Legend layout: one swatch + label per series, stacked near the right edge.

use crate::geometry::Point2D;
use crate::series::SeriesSpec;
use crate::types::Color;

/// Distance of the legend column from the right edge of the inner area.
pub const LEGEND_RIGHT_OFFSET: f64 = 100.0;
pub const LEGEND_ROW_HEIGHT: f64 = 20.0;
pub const LEGEND_SWATCH_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub swatch_color: Color,
    pub label: String,
    /// Top-left of the swatch, in inner-area pixels.
    pub position: Point2D,
}

/// Empty for zero or one series: a single line needs no legend.
pub fn render_legend(series: &[SeriesSpec], inner_width: f64) -> Vec<LegendEntry> {
    if series.len() <= 1 {
        return Vec::new();
    }
    let x = (inner_width - LEGEND_RIGHT_OFFSET).max(0.0);
    series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry {
            swatch_color: s.color,
            label: s.label.clone(),
            position: Point2D::new(x, i as f64 * LEGEND_ROW_HEIGHT),
        })
        .collect()
}
