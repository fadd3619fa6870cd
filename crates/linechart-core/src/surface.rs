// File: crates/linechart-core/src/surface.rs
// Summary: Backend-agnostic drawing surface trait and an in-memory display list implementation.

use crate::geometry::{Point2D, Rect};
use crate::path::Path;
use crate::tooltip::HoverTarget;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
    /// Prefer tabular digits (value labels).
    pub numeric: bool,
}

/// Interactive circle around a marker, in container pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub target: HoverTarget,
    pub center: Point2D,
    pub radius: f64,
}

impl HitRegion {
    pub fn contains(&self, p: Point2D) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// Anything a chart can be drawn onto. All coordinates are container pixels; text is placed
/// on its baseline at `at`, aligned per the style's anchor.
pub trait RenderSurface {
    fn clear(&mut self, color: Color);
    fn draw_path(&mut self, path: &Path, stroke: &StrokeStyle);
    fn draw_circle(&mut self, center: Point2D, radius: f64, fill: Color);
    fn draw_rect(&mut self, rect: Rect, fill: Color, stroke: Option<&StrokeStyle>);
    fn draw_text(&mut self, text: &str, at: Point2D, style: &TextStyle);
    /// Backends with native pointer routing may register the region; raster backends ignore it.
    fn attach_hit_region(&mut self, _region: &HitRegion) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Path { path: Path, stroke: StrokeStyle },
    Circle { center: Point2D, radius: f64, fill: Color },
    Rect { rect: Rect, fill: Color, stroke: Option<StrokeStyle> },
    Text { text: String, at: Point2D, style: TextStyle },
    HitRegion(HitRegion),
}

/// Records draw calls in order, for inspection without a raster backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self { Self::default() }

    pub fn circles(&self) -> impl Iterator<Item = (Point2D, f64, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, fill } => Some((*center, *radius, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn hit_regions(&self) -> impl Iterator<Item = &HitRegion> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::HitRegion(r) => Some(r),
            _ => None,
        })
    }
}

impl RenderSurface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }
    fn draw_path(&mut self, path: &Path, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::Path { path: path.clone(), stroke: *stroke });
    }
    fn draw_circle(&mut self, center: Point2D, radius: f64, fill: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, fill });
    }
    fn draw_rect(&mut self, rect: Rect, fill: Color, stroke: Option<&StrokeStyle>) {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke: stroke.copied() });
    }
    fn draw_text(&mut self, text: &str, at: Point2D, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
    fn attach_hit_region(&mut self, region: &HitRegion) {
        self.commands.push(DrawCommand::HitRegion(region.clone()));
    }
}
