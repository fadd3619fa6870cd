// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo that drives a ChartSurface from winit events and blits the
// Skia raster to the window with softbuffer (CPU).

use anyhow::{Context, Result};
use linechart_core::format::thousands;
use linechart_core::{records_from_json, ChartOptions, ChartSurface};
use linechart_render_skia::{render_to_rgba8, RenderOptions};
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const THEMES: [&str; 5] = ["light", "dark", "solarized-light", "solarized-dark", "high-contrast-dark"];

const SAMPLE: &str = r#"[
    {"month": "Jan", "visits": 420, "signups": 35},
    {"month": "Feb", "visits": 510, "signups": 48},
    {"month": "Mar", "visits": 480, "signups": null},
    {"month": "Apr", "visits": 620, "signups": 61},
    {"month": "May", "visits": 700, "signups": 74},
    {"month": "Jun", "visits": 660, "signups": 69},
    {"month": "Jul", "visits": 730, "signups": 90}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: optional JSON file holding an array of records
    let data = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            records_from_json(&text).with_context(|| format!("parsing records in {path}"))?
        }
        None => records_from_json(SAMPLE)?,
    };

    let mut theme_idx = 0usize;
    let options = ChartOptions::default()
        .with_x_key("month")
        .with_y_keys(["visits", "signups"])
        .with_labels(["Visits", "Sign-ups"])
        .with_format_y(thousands)
        .with_theme(THEMES[theme_idx]);
    let mut chart = ChartSurface::new(options).with_data(data);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Line Chart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 540.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    chart.mount();
    let size = window.inner_size();
    let ticket = chart.request_measure();
    chart.on_measured(ticket, size.width as f64, size.height as f64);
    info!(width = size.width, height = size.height, "chart mounted");

    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, cf| {
        *cf = if chart.is_animating() { ControlFlow::Poll } else { ControlFlow::Wait };
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    chart.unmount();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    let ticket = chart.request_measure();
                    chart.on_measured(ticket, new_size.width as f64, new_size.height as f64);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    chart.pointer_move(position.x, position.y);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.pointer_leave();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    // Any key cycles the theme; new options restart the animation.
                    theme_idx = (theme_idx + 1) % THEMES.len();
                    let options = chart.options().clone().with_theme(THEMES[theme_idx]);
                    chart.set_options(options);
                    info!(theme = THEMES[theme_idx], "theme switched");
                    last_frame = Instant::now();
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if chart.is_animating() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                chart.advance(now.duration_since(last_frame).as_secs_f64() * 1000.0);
                last_frame = now;
                if let Err(e) = present(&chart, &mut surface) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Render to RGBA and pack into softbuffer's 0RGB pixels.
fn present(chart: &ChartSurface, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = render_to_rgba8(chart, &RenderOptions::default())?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
