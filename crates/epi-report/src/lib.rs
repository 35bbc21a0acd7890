// File: crates/epi-report/src/lib.rs
// Summary: Reporter library; reads simulation statistics and renders the epidemic chart.

pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod report;
pub mod table;
pub mod value;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use report::{run, ColumnSummary, ReportSummary};
pub use table::{Record, Table};
pub use value::{Cell, Number};
