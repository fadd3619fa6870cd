// File: crates/linechart-core/src/grid.rs
// Summary: Horizontal gridlines, one per value tick, spanning the inner width.

use crate::axis::Tick;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
}

pub fn gridlines(y_ticks: &[Tick], inner_width: f64) -> Vec<Gridline> {
    y_ticks.iter().map(|t| Gridline { y: t.position, x0: 0.0, x1: inner_width }).collect()
}
