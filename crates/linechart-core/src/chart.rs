// File: crates/linechart-core/src/chart.rs
// Summary: ChartSurface composition root: viewport lifecycle, full-pipeline re-render, animation
// clock, pointer hit testing, and drawing onto any RenderSurface.

use tracing::debug;

use crate::animation::{animate, SeriesFrame, Timeline};
use crate::axis::{render_axes, Axes, TICK_SIZE};
use crate::geometry::{Point2D, Rect};
use crate::grid::{gridlines, Gridline};
use crate::legend::{render_legend, LegendEntry, LEGEND_SWATCH_SIZE};
use crate::options::ChartOptions;
use crate::path::Path;
use crate::record::Record;
use crate::scale::Scales;
use crate::series::{build_geometry, Series, SeriesGeometry, SeriesSpec};
use crate::surface::{HitRegion, RenderSurface, StrokeStyle, TextAnchor, TextStyle};
use crate::theme::{self, Theme};
use crate::tooltip::{HoverTarget, TooltipContent, TooltipController, TooltipState};
use crate::types::Viewport;

const SERIES_STROKE_WIDTH: f64 = 2.0;
const LABEL_SIZE: f32 = 11.0;
// Fallback glyph width used to size the tooltip box without a text shaper.
const AVG_LABEL_CHAR_WIDTH_PX: f64 = 7.0;
const TOOLTIP_PADDING: f64 = 8.0;
const TOOLTIP_LINE_HEIGHT: f64 = 16.0;

/// Everything computed by one pass of the pipeline. Geometry is in inner-area pixels;
/// `origin` is where the inner area sits in the container. Hit regions are in container pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub origin: Point2D,
    pub scales: Scales,
    pub axes: Axes,
    pub gridlines: Vec<Gridline>,
    pub series: Vec<SeriesGeometry>,
    pub legend: Vec<LegendEntry>,
    pub hit_regions: Vec<HitRegion>,
}

/// Run scales, axes, series geometry and legend for one dataset and viewport.
/// `None` means an empty surface: no data, no x values, or no room to draw.
pub fn build_scene(data: &[Record], opts: &ChartOptions, viewport: Viewport) -> Option<Scene> {
    if data.is_empty() {
        return None;
    }
    let scales = Scales::build(data, &opts.x_key, &opts.y_keys, viewport, &opts.insets, opts.x_padding)?;
    let axes = render_axes(&scales.x, &scales.y, &opts.format_x, &opts.format_y);
    let gridlines = if opts.show_grid { gridlines(&axes.y_ticks, scales.inner_width) } else { Vec::new() };
    let specs = SeriesSpec::from_options(opts);
    let series: Vec<SeriesGeometry> = specs
        .iter()
        .map(|spec| build_geometry(&Series::from_records(spec.clone(), data, &opts.x_key), &scales.x, &scales.y))
        .collect();
    let legend = if opts.show_legend { render_legend(&specs, scales.inner_width) } else { Vec::new() };
    let origin = Point2D::new(opts.insets.left as f64, opts.insets.top as f64);
    let hit_regions = if opts.show_tooltip {
        series
            .iter()
            .flat_map(|g| {
                g.points.iter().map(move |p| HitRegion {
                    target: HoverTarget { series_key: g.spec.key.clone(), x_label: p.x_label.clone(), slot: p.slot },
                    center: Point2D::new(p.x + origin.x, p.y + origin.y),
                    radius: opts.hit_radius,
                })
            })
            .collect()
    } else {
        Vec::new()
    };
    Some(Scene { origin, scales, axes, gridlines, series, legend, hit_regions })
}

impl Scene {
    /// Closest hit region containing `at`.
    pub fn hit_test(&self, at: Point2D) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .filter(|r| r.contains(at))
            .min_by(|a, b| a.center.distance(at).total_cmp(&b.center.distance(at)))
    }

    pub fn tooltip_content(&self, target: &HoverTarget, opts: &ChartOptions) -> Option<TooltipContent> {
        let geom = self.series.iter().find(|g| g.spec.key == target.series_key)?;
        let point = geom.points.iter().find(|p| p.slot == target.slot && p.x_label == target.x_label)?;
        Some(TooltipContent {
            title: opts.format_x.apply(&point.x_label),
            series_label: geom.spec.label.clone(),
            value: opts.format_y.apply(point.raw_value),
            color: geom.spec.color,
        })
    }
}

/// Animation state of every series at the current instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub series: Vec<SeriesFrame>,
}

/// Handed out by [`ChartSurface::request_measure`]; a measurement is applied only if its ticket
/// belongs to the current mount and is not older than the last applied one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureTicket {
    epoch: u64,
    seq: u64,
}

/// One chart instance. Owns its options, data, measured viewport, hover state and animation.
pub struct ChartSurface {
    options: ChartOptions,
    data: Vec<Record>,
    theme: Theme,
    viewport: Option<Viewport>,
    scene: Option<Scene>,
    timeline: Option<Timeline>,
    tooltip: TooltipController,
    mounted: bool,
    epoch: u64,
    next_seq: u64,
    applied_seq: u64,
    renders: u64,
}

impl ChartSurface {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            theme: theme::find(&options.theme),
            tooltip: TooltipController::new(options.show_tooltip),
            options,
            data: Vec::new(),
            viewport: None,
            scene: None,
            timeline: None,
            mounted: false,
            epoch: 0,
            next_seq: 0,
            applied_seq: 0,
            renders: 0,
        }
    }

    pub fn with_data(mut self, data: Vec<Record>) -> Self {
        self.set_data(data);
        self
    }

    pub fn set_data(&mut self, data: Vec<Record>) {
        self.data = data;
        self.render();
    }

    pub fn set_options(&mut self, options: ChartOptions) {
        self.theme = theme::find(&options.theme);
        self.tooltip.set_enabled(options.show_tooltip);
        self.options = options;
        self.render();
    }

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn viewport(&self) -> Option<Viewport> { self.viewport }
    pub fn scene(&self) -> Option<&Scene> { self.scene.as_ref() }
    pub fn tooltip(&self) -> &TooltipState { self.tooltip.state() }
    pub fn tooltip_controller(&self) -> &TooltipController { &self.tooltip }
    /// Number of full pipeline runs so far.
    pub fn render_count(&self) -> u64 { self.renders }

    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.epoch += 1;
        self.applied_seq = 0;
    }

    /// Tear down: drops geometry, animation, hover state and any pending measurement.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.epoch += 1;
        self.viewport = None;
        self.scene = None;
        self.timeline = None;
        self.tooltip.hide();
    }

    pub fn request_measure(&mut self) -> MeasureTicket {
        self.next_seq += 1;
        MeasureTicket { epoch: self.epoch, seq: self.next_seq }
    }

    pub fn on_measured(&mut self, ticket: MeasureTicket, width: f64, height: f64) {
        if !self.mounted || ticket.epoch != self.epoch || ticket.seq < self.applied_seq {
            debug!(?ticket, "dropping stale measurement");
            return;
        }
        self.applied_seq = ticket.seq;
        self.resize(width, height);
    }

    /// Apply a container size. A no-op after unmount or when the size did not change.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !self.mounted {
            debug!(width, height, "resize after unmount ignored");
            return;
        }
        let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let vp = Viewport::new(clean(width), clean(height));
        if self.viewport == Some(vp) {
            return;
        }
        self.viewport = Some(vp);
        self.render();
    }

    /// Recompute everything from scratch; restarts animation.
    fn render(&mut self) {
        self.renders += 1;
        self.timeline = None;
        let scene = match self.viewport {
            Some(vp) if self.mounted => build_scene(&self.data, &self.options, vp),
            _ => None,
        };
        match &scene {
            Some(s) => {
                debug!(
                    series = s.series.len(),
                    categories = s.scales.x.len(),
                    y_max = s.scales.y_max,
                    "scene rebuilt"
                );
                let duration = self.options.animation_duration_ms;
                if duration > 0.0 {
                    let schedules = s
                        .series
                        .iter()
                        .map(|g| animate(g.path.length(), g.points.len(), duration, self.options.point_radius))
                        .collect();
                    self.timeline = Some(Timeline::new(schedules));
                }
            }
            None => debug!(records = self.data.len(), "nothing to draw"),
        }
        let kept = self
            .tooltip
            .target()
            .and_then(|t| scene.as_ref().and_then(|s| s.tooltip_content(t, &self.options)));
        match kept {
            Some(content) => self.tooltip.refresh(content),
            None => self.tooltip.hide(),
        }
        self.scene = scene;
    }

    /// Advance the animation clock by one host frame.
    pub fn advance(&mut self, dt_ms: f64) {
        if let Some(tl) = &mut self.timeline {
            tl.advance(dt_ms);
        }
    }

    /// Skip to the final frame, e.g. before a headless snapshot.
    pub fn finish_animation(&mut self) {
        if let Some(tl) = &mut self.timeline {
            tl.finish();
        }
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn frame(&self) -> Option<Frame> {
        let scene = self.scene.as_ref()?;
        let series = match &self.timeline {
            Some(tl) => tl.sample(),
            None => scene
                .series
                .iter()
                .map(|g| SeriesFrame {
                    reveal_length: g.path.length(),
                    radii: vec![self.options.point_radius; g.points.len()],
                })
                .collect(),
        };
        Some(Frame { series })
    }

    /// Pointer position in container pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.mounted || !self.options.show_tooltip {
            return;
        }
        let Some(scene) = &self.scene else { return };
        let at = Point2D::new(x, y);
        match scene.hit_test(at) {
            Some(region) if self.tooltip.target() == Some(&region.target) => self.tooltip.moved(at),
            Some(region) => {
                if let Some(content) = scene.tooltip_content(&region.target, &self.options) {
                    self.tooltip.enter(region.target.clone(), content, at);
                }
            }
            None => {
                if let Some(target) = self.tooltip.target().cloned() {
                    self.tooltip.leave(&target);
                }
            }
        }
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    pub fn draw(&self, target: &mut dyn RenderSurface) {
        target.clear(self.theme.background);
        let (Some(scene), Some(frame)) = (self.scene.as_ref(), self.frame()) else { return };
        let o = scene.origin;
        let (w, h) = (scene.scales.inner_width, scene.scales.inner_height);

        for g in &scene.gridlines {
            let line = segment(Point2D::new(o.x + g.x0, o.y + g.y), Point2D::new(o.x + g.x1, o.y + g.y));
            target.draw_path(&line, &StrokeStyle { color: self.theme.grid, width: 1.0 });
        }

        self.draw_axes(target, scene, o, w, h);

        for (geom, sf) in scene.series.iter().zip(&frame.series) {
            let stroke = StrokeStyle { color: geom.spec.color, width: SERIES_STROKE_WIDTH };
            let revealed = geom.path.reveal(sf.reveal_length);
            if !revealed.is_empty() {
                target.draw_path(&revealed.translate(o.x, o.y), &stroke);
            }
            for (p, &r) in geom.points.iter().zip(&sf.radii) {
                if r > 0.0 {
                    target.draw_circle(Point2D::new(o.x + p.x, o.y + p.y), r, geom.spec.color);
                }
            }
        }

        if self.options.show_tooltip {
            for r in &scene.hit_regions {
                target.attach_hit_region(r);
            }
        }

        let legend_text = TextStyle { size: LABEL_SIZE, color: self.theme.legend_text, anchor: TextAnchor::Start, numeric: false };
        for e in &scene.legend {
            let swatch = Rect::from_ltwh(o.x + e.position.x, o.y + e.position.y, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE);
            target.draw_rect(swatch, e.swatch_color, None);
            target.draw_text(&e.label, Point2D::new(swatch.right + 6.0, swatch.bottom), &legend_text);
        }

        if let Some(view) = self.tooltip.view() {
            let c = view.content;
            let line2 = format!("{}: {}", c.series_label, c.value);
            let chars = c.title.chars().count().max(line2.chars().count() + 2);
            let rect = Rect::from_ltwh(
                view.x,
                view.y,
                chars as f64 * AVG_LABEL_CHAR_WIDTH_PX + TOOLTIP_PADDING * 2.0,
                TOOLTIP_LINE_HEIGHT * 2.0 + TOOLTIP_PADDING,
            );
            target.draw_rect(rect, self.theme.tooltip_background, Some(&StrokeStyle { color: self.theme.tooltip_border, width: 1.0 }));
            let text = TextStyle { size: LABEL_SIZE, color: self.theme.tooltip_text, anchor: TextAnchor::Start, numeric: false };
            let left = rect.left + TOOLTIP_PADDING;
            target.draw_text(&c.title, Point2D::new(left, rect.top + TOOLTIP_LINE_HEIGHT), &text);
            target.draw_circle(Point2D::new(left + 4.0, rect.top + TOOLTIP_LINE_HEIGHT * 2.0 - 4.0), 4.0, c.color);
            target.draw_text(&line2, Point2D::new(left + 14.0, rect.top + TOOLTIP_LINE_HEIGHT * 2.0), &text);
        }
    }

    fn draw_axes(&self, target: &mut dyn RenderSurface, scene: &Scene, o: Point2D, w: f64, h: f64) {
        let axis = StrokeStyle { color: self.theme.axis_line, width: 1.0 };
        let tick = StrokeStyle { color: self.theme.tick, width: 1.0 };
        let bottom = o.y + h;
        target.draw_path(&segment(Point2D::new(o.x, bottom), Point2D::new(o.x + w, bottom)), &axis);
        target.draw_path(&segment(Point2D::new(o.x, o.y), Point2D::new(o.x, bottom)), &axis);

        let mut label = TextStyle { size: LABEL_SIZE, color: self.theme.axis_label, anchor: TextAnchor::Middle, numeric: false };
        for t in &scene.axes.x_ticks {
            let x = o.x + t.position;
            target.draw_path(&segment(Point2D::new(x, bottom), Point2D::new(x, bottom + TICK_SIZE)), &tick);
            target.draw_text(&t.label, Point2D::new(x, bottom + TICK_SIZE + LABEL_SIZE as f64 + 2.0), &label);
        }
        label.anchor = TextAnchor::End;
        label.numeric = true;
        for t in &scene.axes.y_ticks {
            let y = o.y + t.position;
            target.draw_path(&segment(Point2D::new(o.x - TICK_SIZE, y), Point2D::new(o.x, y)), &tick);
            target.draw_text(&t.label, Point2D::new(o.x - TICK_SIZE - 3.0, y + LABEL_SIZE as f64 * 0.35), &label);
        }
    }
}

fn segment(a: Point2D, b: Point2D) -> Path {
    let mut p = Path::new();
    p.move_to(a);
    p.line_to(b);
    p
}
