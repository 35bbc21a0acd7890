// File: crates/epi-chart/src/types.rs
// Summary: Shared types and constants (surface size, plot margins).

/// Default surface width in pixels (a 6.4in figure at 100 dpi).
pub const WIDTH: i32 = 640;
/// Default surface height in pixels (a 4.8in figure at 100 dpi).
pub const HEIGHT: i32 = 480;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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
    /// Room for y tick labels plus the rotated y label on the left,
    /// the title on top and x tick labels plus the x label below.
    fn default() -> Self {
        Self::new(80, 24, 40, 60)
    }
}

/// Plot area in pixel coordinates, derived from surface size and insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    /// Compute the plot rectangle; degenerate sizes collapse to a 1px area.
    pub fn from_surface(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}
