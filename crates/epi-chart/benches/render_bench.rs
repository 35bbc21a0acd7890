use anyhow::Result;
use epi_chart::{Axis, Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

/// Three epidemic-like curves over `n` days with one tick per day.
fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("bench");
    for (k, name) in ["Infections", "Deaths", "Removed Cells"].iter().enumerate() {
        let data = (0..n)
            .map(|i| {
                let x = i as f64;
                let y = (x * 0.05 + k as f64).sin().abs() * 100.0;
                (x, y)
            })
            .collect();
        ch.add_series(Series::with_data(*name, data));
    }
    ch.autoscale_axes(0.05);
    let (lo, hi) = (ch.x_axis.min, ch.x_axis.max);
    ch.x_axis = Axis::new("Time steps (days)", lo, hi).with_integer_ticks(lo, hi);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[30usize, 365usize] {
        group.bench_function(format!("days_{n}"), |b| {
            let ch = build_chart(n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
