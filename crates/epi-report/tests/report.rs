// File: crates/epi-report/tests/report.rs
// Purpose: End-to-end runs of the reporter against files in a scratch directory.

use std::path::Path;

use epi_report::{ReportConfig, ReportError};

const EXAMPLE: &str = "Index, Infections, Deaths, Removed Cells\n0, 1, 0, 0\n1, 5, 0, 1\n2, 9, 1, 3\n";

fn config_in(dir: &Path, content: &str) -> ReportConfig {
    let input = dir.join("statistics.csv");
    std::fs::write(&input, content).unwrap();
    ReportConfig::with_paths(input, dir.join("Simulation.png"))
}

#[test]
fn example_file_produces_png() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), EXAMPLE);

    let summary = epi_report::run(&cfg).expect("run succeeds");
    assert_eq!(summary.retained_rows, 2);
    assert_eq!(summary.index_range, Some((1, 2)));
    assert_eq!(summary.columns.len(), 3);
    assert_eq!(summary.columns[0].total, 14.0);

    let bytes = std::fs::read(&cfg.output).expect("output exists");
    let img = image::load_from_memory(&bytes).expect("valid png");
    assert_eq!((img.width(), img.height()), (640, 480));
}

#[test]
fn simulation_style_file_without_index_column() {
    // The simulation writes only the three counters per day.
    let mut content = String::from("Infections, Deaths, Removed Cells\n");
    for day in 0..40 {
        content.push_str(&format!("{}, {}, {}\n", day * 3 % 17, day % 4, day / 2));
    }
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), &content);

    let summary = epi_report::run(&cfg).unwrap();
    assert_eq!(summary.retained_rows, 39);
    assert_eq!(summary.index_range, Some((1, 39)));
    assert!(cfg.output.exists());
}

#[test]
fn rerun_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), EXAMPLE);
    std::fs::write(&cfg.output, b"stale").unwrap();

    epi_report::run(&cfg).unwrap();
    let first = image::load_from_memory(&std::fs::read(&cfg.output).unwrap()).unwrap().to_rgba8();
    epi_report::run(&cfg).unwrap();
    let second = image::load_from_memory(&std::fs::read(&cfg.output).unwrap()).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn missing_input_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ReportConfig::with_paths(dir.path().join("statistics.csv"), dir.path().join("Simulation.png"));
    let err = epi_report::run(&cfg).unwrap_err();
    assert!(matches!(err, ReportError::FileNotFound { .. }), "{err:?}");
    assert!(!cfg.output.exists());
}

#[test]
fn malformed_row_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "Index, Infections, Deaths, Removed Cells\n0, 1, 0, 0\n1, 5, 0\n2, 9, 1, 3\n");
    let err = epi_report::run(&cfg).unwrap_err();
    assert!(matches!(err, ReportError::MalformedRow { line: 3, expected: 4, found: 3 }), "{err:?}");
    assert!(err.to_string().contains("line 3"));
    assert!(!cfg.output.exists());
}

#[test]
fn non_numeric_cell_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "Index, Infections, Deaths, Removed Cells\n0, 1, 0, 0\n1, 5, NaN_bad, 1\n");
    let err = epi_report::run(&cfg).unwrap_err();
    match &err {
        ReportError::NumericParse { column, line, value } => {
            assert_eq!(column, "Deaths");
            assert_eq!(*line, 3);
            assert_eq!(value, "NaN_bad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!cfg.output.exists());
}

#[test]
fn failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), EXAMPLE);
    epi_report::run(&cfg).unwrap();
    let before = std::fs::read(&cfg.output).unwrap();

    std::fs::write(&cfg.input, "Infections, Deaths, Removed Cells\n0, 0, 0\n1, x, 0\n").unwrap();
    assert!(epi_report::run(&cfg).is_err());
    assert_eq!(std::fs::read(&cfg.output).unwrap(), before);
}

#[test]
fn header_only_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "Infections, Deaths, Removed Cells\n0, 0, 0\n");
    assert!(matches!(epi_report::run(&cfg), Err(ReportError::NoData)));
    assert!(!cfg.output.exists());
}
