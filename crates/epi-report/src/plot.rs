// File: crates/epi-report/src/plot.rs
// Summary: Turns the retained table into a line chart: one series per numeric column over the row index.

use epi_chart::{Axis, Chart, Series, Ticks};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::table::Table;

/// Fraction of the y data span added above and below the curves.
pub const Y_MARGIN: f64 = 0.05;

pub fn build_chart(table: &Table, config: &ReportConfig) -> Result<Chart> {
    let (first, last) = table.index_range().ok_or(ReportError::NoData)?;

    let mut chart = Chart::new().with_title(config.title.as_str());
    for column in &config.numeric_columns {
        chart.add_series(Series::with_data(column.as_str(), table.numeric_points(column)?));
    }
    chart.autoscale_axes(Y_MARGIN);

    // X follows the index range even if some cells are NaN.
    let (lo, hi) = (first as f64, last as f64);
    let (x_min, x_max) = if first == last { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    chart.x_axis = Axis::new(config.x_label.as_str(), x_min, x_max).with_integer_ticks(lo, hi);
    chart.y_axis = Axis::new(config.y_label.as_str(), chart.y_axis.min, chart.y_axis.max)
        .with_ticks(Ticks::Auto(6));
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retained(content: &str) -> Table {
        let mut t = Table::parse(content).unwrap();
        t.drop_first_row();
        for c in crate::config::NUMERIC_COLUMNS {
            t.coerce_numeric(c).unwrap();
        }
        t
    }

    #[test]
    fn one_series_per_numeric_column() {
        let t = retained("Index, Infections, Deaths, Removed Cells\n0, 1, 0, 0\n1, 5, 0, 1\n2, 9, 1, 3\n");
        let chart = build_chart(&t, &ReportConfig::default()).unwrap();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Infections", "Deaths", "Removed Cells"]);
        assert_eq!(chart.series[2].data_xy, vec![(1.0, 1.0), (2.0, 3.0)]);
        assert_eq!(chart.title.as_deref(), Some("Epidemic Simulation"));
        assert_eq!(chart.x_axis.label, "Time steps (days)");
        assert_eq!(chart.y_axis.label, "# of Cells");
    }

    #[test]
    fn x_ticks_cover_every_retained_index() {
        let t = retained("Index, Infections, Deaths, Removed Cells\n0, 1, 0, 0\n1, 5, 0, 1\n2, 9, 1, 3\n");
        let chart = build_chart(&t, &ReportConfig::default()).unwrap();
        assert_eq!(chart.x_axis.tick_positions(), vec![1.0, 2.0]);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 2.0));
    }

    #[test]
    fn y_range_padded_around_data() {
        let t = retained("Infections, Deaths, Removed Cells\n0, 0, 0\n10, 0, 0\n20, 5, 0\n");
        let chart = build_chart(&t, &ReportConfig::default()).unwrap();
        assert!((chart.y_axis.min - (-1.0)).abs() < 1e-9);
        assert!((chart.y_axis.max - 21.0).abs() < 1e-9);
    }

    #[test]
    fn single_retained_row_gets_one_tick() {
        let t = retained("Infections, Deaths, Removed Cells\n0, 0, 0\n4, 1, 2\n");
        let chart = build_chart(&t, &ReportConfig::default()).unwrap();
        assert_eq!(chart.x_axis.tick_positions(), vec![1.0]);
    }

    #[test]
    fn nothing_retained_is_no_data() {
        let t = retained("Infections, Deaths, Removed Cells\n0, 0, 0\n");
        assert!(matches!(build_chart(&t, &ReportConfig::default()), Err(ReportError::NoData)));
    }
}
