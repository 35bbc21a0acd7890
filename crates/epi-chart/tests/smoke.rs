// File: crates/epi-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use epi_chart::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0).with_integer_ticks(0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        "a",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render should succeed");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Bytes written as-is decode back to an image of the configured size
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("smoke.png");
    std::fs::write(&out, &bytes).unwrap();
    let img = image::open(&out).expect("decode written png");
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn png_has_requested_dimensions() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.autoscale_axes(0.05);

    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (320, 200));
}
