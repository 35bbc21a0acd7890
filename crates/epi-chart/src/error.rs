// File: crates/epi-chart/src/error.rs
// Summary: Error type for chart rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
