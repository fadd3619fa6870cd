// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia backend: RenderSurface over a skia Canvas and headless raster output
// (PNG file, PNG bytes, RGBA8 buffer) for a ChartSurface.

pub mod text;

use anyhow::{Context, Result};
use skia_safe as skia;

use linechart_core::types::{HEIGHT, WIDTH};
use linechart_core::{ChartSurface, Color, Path, PathCommand, Point2D, Rect, RenderSurface, StrokeStyle, TextStyle};

pub use text::TextShaper;

pub struct RenderOptions {
    /// Raster size used when the chart has not been measured yet.
    pub width: i32,
    pub height: i32,
    /// Text is skipped when false (keeps snapshots independent of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}

#[inline]
pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn to_skia_path(path: &Path) -> skia::Path {
    let pt = |p: Point2D| (p.x as f32, p.y as f32);
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to(pt(p)); }
            PathCommand::LineTo(p) => { out.line_to(pt(p)); }
            PathCommand::CubicTo { c1, c2, to } => { out.cubic_to(pt(c1), pt(c2), pt(to)); }
        }
    }
    out
}

/// Draws onto a borrowed skia canvas.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    shaper: Option<&'a TextShaper>,
}

impl<'a> SkiaCanvas<'a> {
    /// `shaper: None` skips all text.
    pub fn new(canvas: &'a skia::Canvas, shaper: Option<&'a TextShaper>) -> Self {
        Self { canvas, shaper }
    }
}

impl RenderSurface for SkiaCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_skia_color(color));
    }

    fn draw_path(&mut self, path: &Path, stroke: &StrokeStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width as f32);
        paint.set_color(to_skia_color(stroke.color));
        self.canvas.draw_path(&to_skia_path(path), &paint);
    }

    fn draw_circle(&mut self, center: Point2D, radius: f64, fill: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(fill));
        self.canvas.draw_circle((center.x as f32, center.y as f32), radius as f32, &paint);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color, stroke: Option<&StrokeStyle>) {
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(fill));
        self.canvas.draw_rect(r, &paint);
        if let Some(s) = stroke {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(s.width as f32);
            paint.set_color(to_skia_color(s.color));
            self.canvas.draw_rect(r, &paint);
        }
    }

    fn draw_text(&mut self, text: &str, at: Point2D, style: &TextStyle) {
        if let Some(shaper) = self.shaper {
            shaper.draw_anchored(
                self.canvas,
                text,
                at.x as f32,
                at.y as f32,
                style.size,
                to_skia_color(style.color),
                style.numeric,
                style.anchor,
            );
        }
    }
}

/// Raster size: the chart's measured viewport, or the fallback from `opts`.
fn raster_size(chart: &ChartSurface, opts: &RenderOptions) -> (i32, i32) {
    match chart.viewport() {
        Some(vp) => ((vp.width.round() as i32).max(1), (vp.height.round() as i32).max(1)),
        None => (opts.width.max(1), opts.height.max(1)),
    }
}

fn render_surface(chart: &ChartSurface, opts: &RenderOptions) -> Result<skia::Surface> {
    let (w, h) = raster_size(chart, opts);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = opts.draw_labels.then(TextShaper::new);
    {
        let mut target = SkiaCanvas::new(surface.canvas(), shaper.as_ref());
        chart.draw(&mut target);
    }
    tracing::debug!(width = w, height = h, "rendered chart raster");
    Ok(surface)
}

/// Encode the chart's current frame as PNG bytes.
pub fn render_to_png_bytes(chart: &ChartSurface, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart's current frame to a PNG at `output_png_path`.
pub fn render_to_png(chart: &ChartSurface, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    let out = output_png_path.as_ref();
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &ChartSurface, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(chart, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading raster pixels failed");
    }
    Ok((pixels, w as u32, h as u32, row_bytes))
}
