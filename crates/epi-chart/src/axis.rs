// File: crates/epi-chart/src/axis.rs
// Summary: Axis model with label, visible range and tick placement.

use crate::grid::{integer_ticks, nice_ticks};

/// How tick positions along an axis are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// About this many round-valued ticks inside the visible range.
    Auto(usize),
    /// Exactly these positions (those outside the visible range are skipped).
    Fixed(Vec<f64>),
}

impl Default for Ticks {
    fn default() -> Self { Ticks::Auto(6) }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Ticks::default() }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Place a tick at every integer from `min` to `max` inclusive.
    pub fn with_integer_ticks(self, min: f64, max: f64) -> Self {
        self.with_ticks(Ticks::Fixed(integer_ticks(min, max)))
    }

    /// Tick positions that fall inside `[min, max]`.
    pub fn tick_positions(&self) -> Vec<f64> {
        match &self.ticks {
            Ticks::Auto(n) => nice_ticks(self.min, self.max, *n),
            Ticks::Fixed(v) => {
                let eps = (self.max - self.min).abs() * 1e-9 + 1e-12;
                v.iter()
                    .copied()
                    .filter(|t| *t >= self.min - eps && *t <= self.max + eps)
                    .collect()
            }
        }
    }

    /// Span used for pixel mapping; never zero.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ticks_clip_to_range() {
        let a = Axis::new("t", 1.0, 3.0).with_ticks(Ticks::Fixed(vec![0.0, 1.0, 2.0, 3.0, 4.0]));
        assert_eq!(a.tick_positions(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn integer_ticks_cover_range() {
        let a = Axis::new("t", 1.0, 2.0).with_integer_ticks(1.0, 2.0);
        assert_eq!(a.ticks, Ticks::Fixed(vec![1.0, 2.0]));
        assert_eq!(a.tick_positions(), vec![1.0, 2.0]);
    }

    #[test]
    fn auto_ticks_default() {
        let a = Axis::new("v", 0.0, 10.0);
        assert_eq!(a.tick_positions(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }
}
