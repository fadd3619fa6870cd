// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use serde::{Deserialize, Deserializer};

use crate::error::ChartError;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the inner drawing area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 30, 20, 30)
    }
}

/// Measured size of the container the chart draws into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of the drawing area left after `insets`, or `None` when nothing fits.
    pub fn inner(&self, insets: &Insets) -> Option<(f64, f64)> {
        let w = self.width - insets.hsum() as f64;
        let h = self.height - insets.vsum() as f64;
        if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 { Some((w, h)) } else { None }
    }
}

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
                Ok(Self::from_rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(bad()),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Series palette used when no colors are configured; cycled by series index.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb(0x88, 0x84, 0xd8),
    Color::from_rgb(0x82, 0xca, 0x9d),
    Color::from_rgb(0xff, 0xc6, 0x58),
    Color::from_rgb(0xff, 0x73, 0x00),
    Color::from_rgb(0x00, 0x88, 0xfe),
    Color::from_rgb(0x00, 0xc4, 0x9f),
    Color::from_rgb(0xff, 0xbb, 0x28),
    Color::from_rgb(0xff, 0x80, 0x42),
    Color::from_rgb(0xa4, 0xde, 0x6c),
    Color::from_rgb(0xd0, 0xed, 0x57),
];
