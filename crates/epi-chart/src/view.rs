// File: crates/epi-chart/src/view.rs
// Visible data ranges and autoscale.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data bounds of every series; x is tight, y is padded by `y_margin`
    /// (a fraction of the y span on each side).
    pub fn from_chart(chart: &Chart, y_margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (sx0, sx1, sy0, sy1) in chart.series.iter().filter_map(|s| s.bounds()) {
            x_min = x_min.min(sx0);
            x_max = x_max.max(sx1);
            y_min = y_min.min(sy0);
            y_max = y_max.max(sy1);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        // A single point still needs a visible span; center it.
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let ym = (y_max - y_min) * y_margin.max(0.0);
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    #[test]
    fn empty_chart_falls_back_to_unit_view() {
        let v = ViewState::from_chart(&Chart::new(), 0.05);
        assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn single_point_is_centered() {
        let mut c = Chart::new();
        c.add_series(Series::with_data("a", vec![(3.0, 7.0)]));
        let v = ViewState::from_chart(&c, 0.0);
        assert_eq!((v.x_min, v.x_max), (2.5, 3.5));
        assert_eq!((v.y_min, v.y_max), (6.5, 7.5));
    }
}
