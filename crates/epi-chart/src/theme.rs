// File: crates/epi-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

/// Number of distinct series colors per theme.
pub const PALETTE_LEN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

/// The "tab10" cycle most plotting tools default to.
fn tab_palette() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_rgb(0x1f, 0x77, 0xb4), // blue
        skia::Color::from_rgb(0xff, 0x7f, 0x0e), // orange
        skia::Color::from_rgb(0x2c, 0xa0, 0x2c), // green
        skia::Color::from_rgb(0xd6, 0x27, 0x28), // red
        skia::Color::from_rgb(0x94, 0x67, 0xbd), // purple
        skia::Color::from_rgb(0x8c, 0x56, 0x4b), // brown
    ]
}

impl Theme {
    /// Color for the `i`-th series, cycling through the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % PALETTE_LEN]
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 160, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 130, 255),
                skia::Color::from_argb(255, 200, 160, 120),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: tab_palette(),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            legend_background: skia::Color::from_argb(220, 0x07, 0x36, 0x42),
            legend_border: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            legend_background: skia::Color::from_argb(220, 0xee, 0xe8, 0xd5),
            legend_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            palette: Self::solarized_dark().palette,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0xff, 0x80, 0x00),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
