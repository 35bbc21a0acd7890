// File: crates/epi-report/src/table.rs
// Summary: Table model for the ", "-delimited statistics file: header, ordered records, numeric coercion.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{ReportError, Result};
use crate::value::{Cell, Number};

/// Field separator: a comma followed by exactly one space. No quoting or escaping.
pub const DELIMITER: &str = ", ";

/// One data line of the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 0-based position among the data lines (the header is not counted).
    pub index: usize,
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

/// Split the file content into trimmed lines.
pub fn tokenize(content: &str) -> Vec<&str> {
    content.lines().map(str::trim).collect()
}

pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

fn parse_header(line: Option<&str>) -> Result<Vec<String>> {
    let line = line.ok_or_else(|| ReportError::MalformedHeader { reason: "input is empty".into() })?;
    let columns: Vec<String> = split_fields(line).into_iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(ReportError::MalformedHeader { reason: "no column names".into() });
    }
    let mut seen = HashSet::new();
    for (i, name) in columns.iter().enumerate() {
        if name.is_empty() {
            return Err(ReportError::MalformedHeader { reason: format!("column {} has an empty name", i + 1) });
        }
        if !seen.insert(name.as_str()) {
            return Err(ReportError::MalformedHeader { reason: format!("duplicate column name '{name}'") });
        }
    }
    Ok(columns)
}

impl Table {
    /// Build a table from already tokenized lines; line 0 is the header.
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        let columns = parse_header(lines.first().copied())?;
        let expected = columns.len();

        let mut records = Vec::with_capacity(lines.len().saturating_sub(1));
        for (index, raw) in lines.iter().skip(1).enumerate() {
            let line = index + 2;
            let fields = split_fields(raw);
            if fields.len() != expected {
                return Err(ReportError::MalformedRow { line, expected, found: fields.len() });
            }
            let cells = fields.into_iter().map(|f| Cell::Text(f.to_string())).collect();
            records.push(Record { index, line, cells });
        }
        debug!(columns = expected, rows = records.len(), "parsed table");
        Ok(Self { columns, records })
    }

    /// Tokenize and parse a whole file's content.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_lines(&tokenize(content))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| ReportError::MissingColumn { column: name.to_string() })
    }

    /// Remove the first data record, keeping every other record's index.
    ///
    /// This reproduces the legacy reporter, which always discarded the first
    /// data row after the header had been consumed. It looks like an
    /// off-by-one rather than domain logic, so it is logged when it fires.
    pub fn drop_first_row(&mut self) -> Option<Record> {
        if self.records.is_empty() {
            return None;
        }
        let dropped = self.records.remove(0);
        warn!(line = dropped.line, "discarding first data row (legacy behavior)");
        Some(dropped)
    }

    /// Convert every cell of `column` to a number in place.
    pub fn coerce_numeric(&mut self, column: &str) -> Result<()> {
        let col = self.require_column(column)?;
        for rec in &mut self.records {
            let cell = &mut rec.cells[col];
            if let Cell::Text(text) = cell {
                let n: Number = text.parse().map_err(|_| ReportError::NumericParse {
                    column: column.to_string(),
                    line: rec.line,
                    value: text.clone(),
                })?;
                *cell = Cell::Number(n);
            }
        }
        Ok(())
    }

    /// `(row index, value)` pairs of a numeric column, in row order.
    pub fn numeric_points(&self, column: &str) -> Result<Vec<(f64, f64)>> {
        let col = self.require_column(column)?;
        self.records
            .iter()
            .map(|rec| {
                let n = match &rec.cells[col] {
                    Cell::Number(n) => *n,
                    Cell::Text(text) => text.parse().map_err(|_| ReportError::NumericParse {
                        column: column.to_string(),
                        line: rec.line,
                        value: text.clone(),
                    })?,
                };
                Ok((rec.index as f64, n.as_f64()))
            })
            .collect()
    }

    /// Smallest and largest row index, `None` when the table has no records.
    pub fn index_range(&self) -> Option<(usize, usize)> {
        let first = self.records.first()?.index;
        let last = self.records.last()?.index;
        Some((first, last))
    }
}
