// File: crates/epi-report/src/report.rs
// Summary: The one-shot report pipeline: read, parse, drop first row, coerce, summarize, render, save.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::plot::build_chart;
use crate::table::Table;

/// Totals for one numeric column over the retained rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub total: f64,
    /// `(row index, value)` of the largest finite value.
    pub peak: Option<(usize, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportSummary {
    pub retained_rows: usize,
    pub index_range: Option<(usize, usize)>,
    pub columns: Vec<ColumnSummary>,
    pub output: PathBuf,
}

pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound { path: path.to_path_buf() },
        _ => ReportError::Io { path: path.to_path_buf(), source },
    })
}

/// Parse `content` into the retained, numerically typed table.
pub fn prepare_table(content: &str, numeric_columns: &[String]) -> Result<Table> {
    let mut table = Table::parse(content)?;
    table.drop_first_row();
    for column in numeric_columns {
        table.coerce_numeric(column)?;
    }
    Ok(table)
}

pub fn summarize(table: &Table, numeric_columns: &[String]) -> Result<Vec<ColumnSummary>> {
    numeric_columns
        .iter()
        .map(|column| {
            let points = table.numeric_points(column)?;
            let total: f64 = points.iter().map(|&(_, y)| y).filter(|y| y.is_finite()).sum();
            let peak = points
                .iter()
                .filter(|(_, y)| y.is_finite())
                .fold(None, |best: Option<(usize, f64)>, &(x, y)| match best {
                    Some((_, b)) if b >= y => best,
                    _ => Some((x as usize, y)),
                });
            Ok(ColumnSummary { column: column.clone(), total, peak })
        })
        .collect()
}

/// Write `bytes` next to `output` under a temporary name, then rename over it.
/// A failed run leaves any previous `output` untouched and no partial file.
///
/// The result gets the previous output's permissions, or for a new file the
/// mode a plain `fs::write` would give (0666 less the process umask).
pub fn save_atomic(bytes: &[u8], output: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| ReportError::Io { path: output.to_path_buf(), source };
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".statistics-graph-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // passed to open(2), so the umask applies
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(io_err)?;
    if let Ok(previous) = std::fs::metadata(output) {
        tmp.as_file().set_permissions(previous.permissions()).map_err(io_err)?;
    }
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(output).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Run the whole report. Any error aborts before the output is touched.
pub fn run(config: &ReportConfig) -> Result<ReportSummary> {
    info!(input = %config.input.display(), "reading statistics");
    let content = read_input(&config.input)?;
    let table = prepare_table(&content, &config.numeric_columns)?;
    info!(rows = table.len(), columns = table.columns().len(), "table ready");

    let columns = summarize(&table, &config.numeric_columns)?;
    for c in &columns {
        match c.peak {
            Some((day, value)) => info!(column = %c.column, total = c.total, peak = value, peak_day = day, "summary"),
            None => info!(column = %c.column, total = c.total, "summary"),
        }
    }

    let chart = build_chart(&table, config)?;
    let png = chart.render_to_png_bytes(&config.render_options())?;
    debug!(bytes = png.len(), "rendered chart");

    save_atomic(&png, &config.output)?;
    info!(output = %config.output.display(), "chart written");

    Ok(ReportSummary {
        retained_rows: table.len(),
        index_range: table.index_range(),
        columns,
        output: config.output.clone(),
    })
}
