// File: crates/epi-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster -> RGBA8 -> PNG).

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::grid::format_tick;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 12.0;
const TICK_SIZE: f32 = 10.0;
const LEGEND_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 3.5;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text. Off for pixel-exact tests.
    pub draw_labels: bool,
    pub draw_grid: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_grid: false,
            draw_legend: true,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data: x tight, y padded by `y_margin` of its span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Render into an RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None::<skia::ColorSpace>,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::ReadPixels)?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        let bytes = out.into_inner();
        debug!(width = w, height = h, bytes = bytes.len(), "encoded png");
        Ok(bytes)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let frame = Frame::new(
            PlotRect::from_surface(opts.width, opts.height, &opts.insets),
            &self.x_axis,
            &self.y_axis,
        );
        let x_ticks = self.x_axis.tick_positions();
        let y_ticks = self.y_axis.tick_positions();

        if opts.draw_grid {
            draw_grid(canvas, &frame, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(frame.skia_rect(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &frame, s, theme.series_color(i));
        }
        canvas.restore();

        draw_axes(canvas, &frame, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, &frame, self, &x_ticks, &y_ticks, theme);
            if opts.draw_legend {
                draw_legend(canvas, &shaper, &frame, &self.series, theme);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Plot rectangle plus the data -> pixel mapping.
struct Frame {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Frame {
    fn new(rect: PlotRect, x: &Axis, y: &Axis) -> Self {
        Self {
            l: rect.left as f32,
            t: rect.top as f32,
            r: rect.right as f32,
            b: rect.bottom as f32,
            x_min: x.min,
            x_span: x.span(),
            y_min: y.min,
            y_span: y.span(),
        }
    }

    fn sx(&self, x: f64) -> f32 {
        self.l + ((x - self.x_min) / self.x_span) as f32 * (self.r - self.l)
    }

    fn sy(&self, y: f64) -> f32 {
        self.b - ((y - self.y_min) / self.y_span) as f32 * (self.b - self.t)
    }

    fn skia_rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.l, self.t, self.r, self.b)
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, f: &Frame, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for &x in x_ticks {
        let px = f.sx(x);
        canvas.draw_line((px, f.t), (px, f.b), &paint);
    }
    for &y in y_ticks {
        let py = f.sy(y);
        canvas.draw_line((f.l, py), (f.r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, f: &Frame, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    // Box around the plot area
    let frame_paint = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_rect(f.skia_rect(), &frame_paint);

    // Outward tick marks
    let tick_paint = stroke_paint(theme.tick, 1.0);
    for &x in x_ticks {
        let px = f.sx(x);
        canvas.draw_line((px, f.b), (px, f.b + TICK_LEN), &tick_paint);
    }
    for &y in y_ticks {
        let py = f.sy(y);
        canvas.draw_line((f.l - TICK_LEN, py), (f.l, py), &tick_paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    f: &Frame,
    chart: &Chart,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    for &x in x_ticks {
        shaper.draw_anchored(
            canvas, &format_tick(x), f.sx(x), f.b + TICK_LEN + TICK_SIZE + 2.0,
            TICK_SIZE, theme.tick, Anchor::Center, true,
        );
    }
    let mut widest = 0.0f32;
    for &y in y_ticks {
        let text = format_tick(y);
        widest = widest.max(shaper.measure_width(&text, TICK_SIZE, true));
        shaper.draw_anchored(
            canvas, &text, f.l - TICK_LEN - 3.0, f.sy(y) + TICK_SIZE * 0.35,
            TICK_SIZE, theme.tick, Anchor::Right, true,
        );
    }

    let cx = (f.l + f.r) * 0.5;
    let cy = (f.t + f.b) * 0.5;
    if !chart.x_axis.label.is_empty() {
        shaper.draw_anchored(
            canvas, &chart.x_axis.label, cx, f.b + TICK_LEN + TICK_SIZE + LABEL_SIZE + 10.0,
            LABEL_SIZE, theme.axis_label, Anchor::Center, false,
        );
    }
    if !chart.y_axis.label.is_empty() {
        let x = (f.l - TICK_LEN - widest - 6.0 - LABEL_SIZE * 0.5).max(LABEL_SIZE * 0.5);
        shaper.draw_vertical(canvas, &chart.y_axis.label, x, cy, LABEL_SIZE, theme.axis_label);
    }
    if let Some(title) = chart.title.as_deref() {
        shaper.draw_anchored(
            canvas, title, cx, f.t - 10.0, TITLE_SIZE, theme.title, Anchor::Center, false,
        );
    }
}

fn draw_line_series(canvas: &skia::Canvas, f: &Frame, series: &Series, color: skia::Color) {
    if series.data_xy.len() < 2 {
        return;
    }

    // Non-finite points break the line instead of being joined across.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (f.sx(x), f.sy(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    canvas.draw_path(&path, &stroke_paint(color, 1.5));
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, f: &Frame, series: &[Series], theme: &Theme) {
    if series.is_empty() {
        return;
    }
    const PAD: f32 = 6.0;
    const SWATCH: f32 = 20.0;
    const ROW: f32 = LEGEND_SIZE + 5.0;

    let text_w = series
        .iter()
        .map(|s| shaper.measure_width(&s.label, LEGEND_SIZE, false))
        .fold(0.0f32, f32::max);
    let w = PAD * 3.0 + SWATCH + text_w;
    let h = PAD * 2.0 + ROW * series.len() as f32;
    // Upper-right corner, inset from the frame
    let right = f.r - 8.0;
    let top = f.t + 8.0;
    let rect = skia::Rect::from_ltrb(right - w, top, right, top + h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    canvas.draw_rect(rect, &fill);
    canvas.draw_rect(rect, &stroke_paint(theme.legend_border, 1.0));

    for (i, s) in series.iter().enumerate() {
        let color = theme.series_color(i);
        let mid = top + PAD + ROW * (i as f32 + 0.5);
        let x0 = rect.left + PAD;
        canvas.draw_line((x0, mid), (x0 + SWATCH, mid), &stroke_paint(color, 1.5));
        shaper.draw_left(
            canvas, &s.label, x0 + SWATCH + PAD, mid + LEGEND_SIZE * 0.35,
            LEGEND_SIZE, theme.axis_label, false,
        );
    }
}
