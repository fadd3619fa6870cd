// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart pipeline and the chart surface.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod curve;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod options;
pub mod path;
pub mod record;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use animation::{animate, Easing, SeriesFrame, SeriesSchedule, Timeline, Tween};
pub use axis::{render_axes, Axes, Tick};
pub use chart::{build_scene, ChartSurface, Frame, MeasureTicket, Scene};
pub use error::ChartError;
pub use geometry::{Point2D, Rect};
pub use legend::{render_legend, LegendEntry};
pub use options::{ChartOptions, XFormat, YFormat};
pub use path::{Path, PathCommand};
pub use record::{record, records_from_json, Record};
pub use scale::{LinearScale, PointScale, Scales};
pub use series::{build_geometry, PlotPoint, Series, SeriesGeometry, SeriesSpec};
pub use surface::{DisplayList, DrawCommand, HitRegion, RenderSurface, StrokeStyle, TextAnchor, TextStyle};
pub use theme::Theme;
pub use tooltip::{HoverTarget, TooltipContent, TooltipController, TooltipState};
pub use types::{Color, Insets, Viewport};
