// File: crates/epi-chart/src/grid.rs
// Summary: Tick layout helpers: fixed-step and "nice" ticks, tick label formatting.

/// Half-open range `[start, stop)` sampled every `step`.
/// Empty when the bounds are not finite, `step <= 0` or `stop <= start`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || !(step > 0.0) || stop <= start {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// One tick per unit step from `min` through `max` inclusive.
///
/// Every integer step gets a tick no matter how long the range is, so long
/// series produce a dense axis.
pub fn integer_ticks(min: f64, max: f64) -> Vec<f64> {
    arange(min, max + 1.0, 1.0)
}

/// Round `span` to a 1/2/5 x 10^k step.
fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / (target.max(2) - 1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Roughly `target` human-friendly ticks inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return if min.is_finite() { vec![min] } else { Vec::new() };
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        // multiply from an integer count to keep float noise out of labels
        .map(|k| k as f64 * step)
        .collect()
}

/// Format a tick value: integers without decimals, everything else trimmed.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        // avoid printing "-0"
        let r = v.round();
        return format!("{}", if r == 0.0 { 0 } else { r as i64 });
    }
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
