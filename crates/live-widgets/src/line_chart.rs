// File: crates/live-widgets/src/line_chart.rs
// Summary: Scrolling multi-series line chart over per-series sliding windows.
// Notes:
// - One cached Skia path per series. A push rebuilds only that series' path
//   unless the y-domain moved, in which case every path is rebuilt.
// - Samples are right-aligned: the newest sample sits on the right edge and a
//   window that is not yet full leaves a gap on the left.

use std::collections::BTreeMap;
use std::rc::Rc;

use skia_safe as skia;

use crate::axis::Axis;
use crate::buffers::{Redraw, SeriesBuffers};
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::geometry::RectI32;
use crate::grid::linspace;
use crate::legend::{self, LegendEntry};
use crate::metadata::SeriesCatalog;
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::types::SeriesId;
use crate::widget::{RenderOptions, Widget};
use crate::window::SampleWindow;

pub struct LineChart {
    region: RectI32,
    opts: RenderOptions,
    buffers: SeriesBuffers,
    catalog: Rc<dyn SeriesCatalog>,
    x_axis: Axis,
    y_axis: Axis,
    x_scale: LinearScale,
    y_scale: LinearScale,
    paths: BTreeMap<SeriesId, skia::Path>,
    legend: Vec<LegendEntry>,
    last_redraw: Redraw,
}

impl LineChart {
    pub fn new(
        region: RectI32,
        opts: RenderOptions,
        period_secs: f64,
        sampling_time_ms: u32,
        catalog: Rc<dyn SeriesCatalog>,
    ) -> Result<Self> {
        let buffers = SeriesBuffers::new(period_secs, sampling_time_ms)?;
        let mut chart = Self {
            region,
            opts,
            buffers,
            catalog,
            x_axis: Axis::time(period_secs),
            y_axis: Axis::value("", 0.0),
            x_scale: LinearScale::new((0.0, 1.0), (0.0, 1.0)),
            y_scale: LinearScale::new((0.0, 1.0), (1.0, 0.0)),
            paths: BTreeMap::new(),
            legend: Vec::new(),
            last_redraw: Redraw::None,
        };
        chart.layout();
        Ok(chart)
    }

    pub fn from_config(region: RectI32, cfg: &WidgetConfig, catalog: Rc<dyn SeriesCatalog>) -> Result<Self> {
        cfg.validate()?;
        let opts = RenderOptions { theme: cfg.theme(), draw_labels: cfg.draw_labels, ..RenderOptions::default() };
        let mut chart = Self::new(region, opts, cfg.period_secs, cfg.sampling_time_ms, catalog)?;
        chart.y_axis.label = cfg.y_label.clone();
        Ok(chart)
    }

    /// Window capacity: `period / sampling_time * 1000`.
    pub fn amount_of_values(&self) -> usize { self.buffers.amount_of_values() }

    pub fn period(&self) -> f64 { self.buffers.period() }

    /// Displayed y-axis upper bound.
    pub fn max_value(&self) -> f64 { self.buffers.max() }

    pub fn max_value_from_data(&self) -> f64 { self.buffers.max_value_from_data() }

    pub fn window(&self, id: &SeriesId) -> Option<&SampleWindow> { self.buffers.get(id) }

    pub fn buffers(&self) -> &SeriesBuffers { &self.buffers }

    pub fn legend(&self) -> &[LegendEntry] { &self.legend }

    pub fn path(&self, id: &SeriesId) -> Option<&skia::Path> { self.paths.get(id) }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    /// What the most recent mutation asked to redraw.
    pub fn last_redraw(&self) -> Redraw { self.last_redraw }

    pub fn plot_rect(&self) -> RectI32 {
        self.region.inset(&self.opts.insets)
    }

    /// Apply a buffer mutation's redraw request to the cached geometry.
    fn apply(&mut self, redraw: Redraw, id: Option<&SeriesId>) {
        match (redraw, id) {
            (Redraw::None, _) => {}
            (Redraw::Series, Some(id)) => self.rebuild_path(id),
            (Redraw::Series, None) | (Redraw::All, _) => self.rebuild_all(),
        }
        self.last_redraw = redraw;
    }

    /// Pixel ranges from the region, domains from the buffers.
    fn layout(&mut self) {
        let plot = self.plot_rect();
        self.x_scale.set_range(plot.left as f32, plot.right as f32);
        self.y_scale.set_range(plot.bottom as f32, plot.top as f32);
        self.rebuild_all();
    }

    fn rebuild_all(&mut self) {
        let capacity = self.buffers.amount_of_values();
        self.x_scale.set_domain(0.0, capacity.saturating_sub(1) as f64);
        self.x_axis = Axis::time(self.buffers.period());
        let max = self.buffers.max();
        let (lo, hi) = if max >= 0.0 { (0.0, max) } else { (max, 0.0) };
        self.y_scale.set_domain(lo, hi);
        self.y_axis.min = lo;
        self.y_axis.max = hi;

        self.paths.clear();
        let ids: Vec<SeriesId> = self.buffers.ids().cloned().collect();
        for id in &ids {
            self.rebuild_path(id);
        }
        self.legend = legend::build(&ids, self.catalog.as_ref(), &self.opts.theme);
    }

    fn rebuild_path(&mut self, id: &SeriesId) {
        let Some(window) = self.buffers.get(id) else { return; };
        let path = series_path(window, self.buffers.amount_of_values(), &self.x_scale, &self.y_scale);
        self.paths.insert(id.clone(), path);
    }
}

/// Polyline through `window`, right-aligned within `capacity` slots.
fn series_path(window: &SampleWindow, capacity: usize, xs: &LinearScale, ys: &LinearScale) -> skia::Path {
    let mut path = skia::Path::new();
    let offset = capacity.saturating_sub(window.len());
    for (i, v) in window.iter().enumerate() {
        let p = (xs.to_px((offset + i) as f64), ys.to_px(v));
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path
}

impl Widget for LineChart {
    fn name(&self) -> &'static str { "Line chart" }

    fn push(&mut self, id: &SeriesId, value: f64) {
        let redraw = self.buffers.push(id, value);
        self.apply(redraw, Some(id));
    }

    fn add_data_type(&mut self, id: SeriesId) {
        let redraw = self.buffers.add_series(id);
        self.apply(redraw, None);
    }

    fn remove_data_type(&mut self, id: &SeriesId) {
        let redraw = self.buffers.remove_series(id);
        self.apply(redraw, None);
    }

    fn sampling_time(&self) -> u32 { self.buffers.sampling_time() }

    fn set_sampling_time(&mut self, ms: u32) -> Result<()> {
        let redraw = self.buffers.set_sampling_time(ms)?;
        self.apply(redraw, None);
        Ok(())
    }

    fn has_period(&self) -> bool { true }

    fn change_period(&mut self, period_secs: f64) -> Result<()> {
        let redraw = self.buffers.change_period(period_secs)?;
        tracing::debug!(period_secs, capacity = self.buffers.amount_of_values(), "period changed");
        self.apply(redraw, None);
        Ok(())
    }

    fn region(&self) -> RectI32 { self.region }

    fn on_resize(&mut self, region: RectI32) {
        self.region = region;
        self.layout();
    }

    fn draw(&self, canvas: &skia::Canvas, text: &TextShaper) {
        let theme = &self.opts.theme;
        let plot = self.plot_rect();

        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(self.region.to_skia(), &bg);

        draw_grid(canvas, &plot, theme.grid, self.x_axis.ticks, self.y_axis.ticks);
        draw_axes(canvas, &plot, theme.axis_line);
        if self.opts.draw_labels {
            self.draw_tick_labels(canvas, &plot, text);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, true);
        for entry in &self.legend {
            if let Some(path) = self.paths.get(&entry.id) {
                stroke.set_color(entry.color);
                canvas.draw_path(path, &stroke);
            }
        }
        canvas.restore();

        legend::draw(
            canvas,
            &self.legend,
            plot.right as f32 + 16.0,
            plot.top as f32,
            text,
            theme,
            self.opts.draw_labels,
            self.opts.label_size,
        );
    }
}

impl LineChart {
    fn draw_tick_labels(&self, canvas: &skia::Canvas, plot: &RectI32, text: &TextShaper) {
        let theme = &self.opts.theme;
        let size = self.opts.label_size;
        let time = LinearScale::new((self.x_axis.min, self.x_axis.max), (plot.left as f32, plot.right as f32));
        for (v, label) in self.x_axis.tick_labels() {
            text.draw_centered(canvas, &label, time.to_px(v), plot.bottom as f32 + size + 4.0, size, theme.axis_label, true);
        }
        for (v, label) in self.y_axis.tick_labels() {
            text.draw_right(canvas, &label, plot.left as f32 - 6.0, self.y_scale.to_px(v) + size * 0.35, size, theme.axis_label, true);
        }
        if !self.y_axis.label.is_empty() {
            text.draw_left(canvas, &self.y_axis.label, self.region.left as f32 + 4.0, plot.top as f32 - 2.0, size, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, color: skia::Color, x_ticks: usize, y_ticks: usize) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for x in linspace(l as f64, r as f64, x_ticks) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, y_ticks) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, color: skia::Color) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(color);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}
