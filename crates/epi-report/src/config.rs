// File: crates/epi-report/src/config.rs
// Summary: Report configuration; defaults reproduce the fixed file names and labels of the legacy script.

use std::path::PathBuf;

use epi_chart::types::{HEIGHT, WIDTH};
use epi_chart::{RenderOptions, Theme};

pub const DEFAULT_INPUT: &str = "statistics.csv";
pub const DEFAULT_OUTPUT: &str = "Simulation.png";

pub const TITLE: &str = "Epidemic Simulation";
pub const X_LABEL: &str = "Time steps (days)";
pub const Y_LABEL: &str = "# of Cells";

/// Columns coerced to numbers and plotted, in legend order.
pub const NUMERIC_COLUMNS: [&str; 3] = ["Infections", "Deaths", "Removed Cells"];

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub numeric_columns: Vec<String>,
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub grid: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            numeric_columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            grid: false,
        }
    }
}

impl ReportConfig {
    /// Same defaults, reading from `input` and writing to `output`.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: output.into(), ..Self::default() }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: self.theme,
            draw_grid: self.grid,
            ..RenderOptions::default()
        }
    }
}
