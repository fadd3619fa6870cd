// File: crates/linechart-core/src/theme.rs
// Summary: Light/Dark theming for the non-series chrome (background, axes, grid, tooltip, legend).

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
    pub legend_text: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 150, 150, 160),
            tooltip_background: Color::from_argb(235, 32, 32, 38),
            tooltip_border: Color::from_argb(255, 90, 90, 100),
            tooltip_text: Color::from_argb(255, 235, 235, 245),
            legend_text: Color::from_argb(255, 210, 210, 220),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 255, 255, 255),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            tick: Color::from_argb(255, 100, 100, 110),
            tooltip_background: Color::from_argb(240, 255, 255, 255),
            tooltip_border: Color::from_argb(255, 204, 204, 204),
            tooltip_text: Color::from_argb(255, 20, 20, 30),
            legend_text: Color::from_argb(255, 40, 40, 50),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            tooltip_background: Color::from_argb(240, 0x07, 0x36, 0x42),
            tooltip_border: Color::from_argb(255, 0x58, 0x6e, 0x75),
            tooltip_text: Color::from_argb(255, 0xee, 0xe8, 0xd5),
            legend_text: Color::from_argb(255, 0x93, 0xa1, 0xa1),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            tooltip_background: Color::from_argb(240, 0xee, 0xe8, 0xd5),
            tooltip_border: Color::from_argb(255, 0x93, 0xa1, 0xa1),
            tooltip_text: Color::from_argb(255, 0x00, 0x2b, 0x36),
            legend_text: Color::from_argb(255, 0x58, 0x6e, 0x75),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_background: Color::from_argb(255, 0x00, 0x00, 0x00),
            tooltip_border: Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_text: Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
