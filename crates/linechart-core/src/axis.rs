// File: crates/linechart-core/src/axis.rs
// Summary: Axis ticks with formatted labels derived from the scales.

use crate::options::{XFormat, YFormat};
use crate::scale::{LinearScale, PointScale};

/// Target tick count for the value axis; the actual count follows round-number steps.
pub const Y_TICK_TARGET: usize = 5;
/// Length of tick marks, in pixels.
pub const TICK_SIZE: f64 = 6.0;

/// A labeled reference mark. `position` is along the axis, in inner-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axes {
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// One tick per category on the horizontal axis; round-number ticks on the vertical axis.
pub fn render_axes(x: &PointScale, y: &LinearScale, format_x: &XFormat, format_y: &YFormat) -> Axes {
    let x_ticks = x
        .domain()
        .iter()
        .enumerate()
        .map(|(i, v)| Tick { position: x.position(i), label: format_x.apply(v) })
        .collect();
    let y_ticks = y
        .ticks(Y_TICK_TARGET)
        .into_iter()
        .map(|v| Tick { position: y.map(v), label: format_y.apply(v) })
        .collect();
    Axes { x_ticks, y_ticks }
}
