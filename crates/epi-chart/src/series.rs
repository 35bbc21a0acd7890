// File: crates/epi-chart/src/series.rs
// Summary: Named line series of (x, y) points; stroke colors come from the theme palette.

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` if there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut b: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            b = Some(match b {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        b
    }
}
