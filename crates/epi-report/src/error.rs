// File: crates/epi-report/src/error.rs
// Summary: Failure kinds of a report run. Every variant is fatal for the run.

use std::path::PathBuf;

use epi_chart::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed header: {reason}")]
    MalformedHeader { reason: String },

    /// `line` is 1-based and counts the header line.
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow { line: usize, expected: usize, found: usize },

    #[error("column '{column}', line {line}: cannot parse {value:?} as a number")]
    NumericParse { column: String, line: usize, value: String },

    #[error("required column '{column}' is missing from the header")]
    MissingColumn { column: String },

    #[error("no data rows left to plot")]
    NoData,

    #[error("rendering failed")]
    Render(#[from] ChartError),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
