// File: crates/linechart-core/src/tooltip.rs
// Summary: Hover state machine (Hidden / Visible) for point-marker tooltips.

use crate::geometry::Point2D;
use crate::types::Color;

/// Tooltip offset from the pointer: right and up, so the hovered marker stays visible.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -30.0);

/// Identifies a marker by series and source record, so repeated categories stay distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoverTarget {
    pub series_key: String,
    pub x_label: String,
    pub slot: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// Formatted category.
    pub title: String,
    pub series_label: String,
    /// Formatted value.
    pub value: String,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible { target: HoverTarget, pointer: Point2D, content: TooltipContent },
}

/// Where and what to draw, in container pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView<'a> {
    pub x: f64,
    pub y: f64,
    pub content: &'a TooltipContent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipController {
    enabled: bool,
    state: TooltipState,
}

impl TooltipController {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, state: TooltipState::Hidden }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = TooltipState::Hidden;
        }
    }

    pub fn state(&self) -> &TooltipState { &self.state }

    pub fn is_visible(&self) -> bool { matches!(self.state, TooltipState::Visible { .. }) }

    pub fn target(&self) -> Option<&HoverTarget> {
        match &self.state {
            TooltipState::Visible { target, .. } => Some(target),
            TooltipState::Hidden => None,
        }
    }

    /// Pointer entered a marker's hit-area. Also covers moving straight from one marker to another.
    pub fn enter(&mut self, target: HoverTarget, content: TooltipContent, pointer: Point2D) {
        if !self.enabled {
            return;
        }
        tracing::trace!(series = %target.series_key, x = %target.x_label, "tooltip shown");
        self.state = TooltipState::Visible { target, pointer, content };
    }

    /// Pointer moved while over the current marker.
    pub fn moved(&mut self, at: Point2D) {
        if let TooltipState::Visible { pointer, .. } = &mut self.state {
            *pointer = at;
        }
    }

    /// Pointer left `target`. Ignored when another marker has already taken over.
    pub fn leave(&mut self, target: &HoverTarget) {
        if self.target() == Some(target) {
            self.hide();
        }
    }

    /// Unconditional hide; a no-op when already hidden.
    pub fn hide(&mut self) {
        if self.is_visible() {
            tracing::trace!("tooltip hidden");
        }
        self.state = TooltipState::Hidden;
    }

    /// Replace the content of the visible tooltip (after a re-render).
    pub fn refresh(&mut self, fresh: TooltipContent) {
        if let TooltipState::Visible { content, .. } = &mut self.state {
            *content = fresh;
        }
    }

    pub fn view(&self) -> Option<TooltipView<'_>> {
        match &self.state {
            TooltipState::Visible { pointer, content, .. } => Some(TooltipView {
                x: pointer.x + TOOLTIP_OFFSET.0,
                y: pointer.y + TOOLTIP_OFFSET.1,
                content,
            }),
            TooltipState::Hidden => None,
        }
    }
}

impl Default for TooltipController {
    fn default() -> Self { Self::new(true) }
}
