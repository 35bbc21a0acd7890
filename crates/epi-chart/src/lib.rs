// File: crates/epi-chart/src/lib.rs
// Summary: Chart library entry point; exports the public API for building and rendering line charts.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, Ticks};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::ChartError;
