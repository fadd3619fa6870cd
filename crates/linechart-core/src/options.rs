// File: crates/linechart-core/src/options.rs
// Summary: Chart configuration: keys, colors, labels, formatters, toggles and animation timing.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ChartError;
use crate::format;
use crate::types::{Color, Insets, DEFAULT_PALETTE};

/// Formatter for category labels (x ticks, tooltip title).
#[derive(Clone)]
pub struct XFormat(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl XFormat {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self { Self(Arc::new(f)) }
    pub fn apply(&self, label: &str) -> String { (self.0)(label) }
}

impl Default for XFormat {
    fn default() -> Self { Self::new(format::identity_x) }
}

impl fmt::Debug for XFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("XFormat(..)") }
}

/// Formatter for values (y ticks, tooltip value).
#[derive(Clone)]
pub struct YFormat(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl YFormat {
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self { Self(Arc::new(f)) }
    pub fn apply(&self, v: f64) -> String { (self.0)(v) }
}

impl Default for YFormat {
    fn default() -> Self { Self::new(format::identity_y) }
}

impl fmt::Debug for YFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("YFormat(..)") }
}

/// Everything the chart accepts besides the data itself.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Field used as the categorical axis.
    pub x_key: String,
    /// One series per key, in order.
    pub y_keys: Vec<String>,
    /// Cycled by series index; the built-in palette is used when empty.
    pub colors: Vec<Color>,
    /// Display labels by series index; falls back to the key.
    pub labels: Vec<String>,
    #[serde(skip)]
    pub format_x: XFormat,
    #[serde(skip)]
    pub format_y: YFormat,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_tooltip: bool,
    /// 0 disables animation.
    pub animation_duration_ms: f64,
    /// Resting radius of point markers.
    pub point_radius: f64,
    /// Radius of the pointer hit-area around each marker.
    pub hit_radius: f64,
    /// Outer padding of the categorical scale, in steps.
    pub x_padding: f64,
    pub insets: Insets,
    /// Theme preset name, see [`crate::theme::find`].
    pub theme: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_key: "x".into(),
            y_keys: vec!["y".into()],
            colors: Vec::new(),
            labels: Vec::new(),
            format_x: XFormat::default(),
            format_y: YFormat::default(),
            show_grid: true,
            show_legend: true,
            show_tooltip: true,
            animation_duration_ms: 1000.0,
            point_radius: 4.0,
            hit_radius: 8.0,
            x_padding: 0.5,
            insets: Insets::default(),
            theme: "light".into(),
        }
    }
}

impl ChartOptions {
    /// Parse options from JSON; formatters keep their identity defaults.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn series_color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            self.colors[index % self.colors.len()]
        }
    }

    pub fn series_label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .or_else(|| self.y_keys.get(index).cloned())
            .unwrap_or_default()
    }

    pub fn with_x_key(mut self, key: impl Into<String>) -> Self {
        self.x_key = key.into();
        self
    }

    pub fn with_y_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.y_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format_x(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.format_x = XFormat::new(f);
        self
    }

    pub fn with_format_y(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format_y = YFormat::new(f);
        self
    }

    pub fn with_grid(mut self, on: bool) -> Self {
        self.show_grid = on;
        self
    }

    pub fn with_legend(mut self, on: bool) -> Self {
        self.show_legend = on;
        self
    }

    pub fn with_tooltip(mut self, on: bool) -> Self {
        self.show_tooltip = on;
        self
    }

    pub fn with_animation_duration(mut self, ms: f64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }
}
