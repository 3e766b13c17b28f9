// File: crates/live-widgets/src/number_chart.rs
// Summary: Scalar readout widget; shows the most recently pushed value as text.
// Notes:
// - The series id on push is accepted but not used for display. With several
//   registered series the last push wins.

use std::collections::BTreeSet;

use skia_safe as skia;

use crate::buffers::validate_sampling_time;
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::types::{SeriesId, DEFAULT_SAMPLING_TIME_MS};
use crate::widget::{RenderOptions, Widget};

pub struct NumberChart {
    region: RectI32,
    opts: RenderOptions,
    sampling_time_ms: u32,
    series: BTreeSet<SeriesId>,
    precision: Option<usize>,
    unit: Option<String>,
    value: f64,
    text: String,
}

impl NumberChart {
    pub fn new(region: RectI32, opts: RenderOptions) -> Self {
        let mut chart = Self {
            region,
            opts,
            sampling_time_ms: DEFAULT_SAMPLING_TIME_MS,
            series: BTreeSet::new(),
            precision: None,
            unit: None,
            value: 0.0,
            text: String::new(),
        };
        chart.refresh_text();
        chart
    }

    pub fn from_config(region: RectI32, cfg: &WidgetConfig) -> Result<Self> {
        cfg.validate()?;
        let opts = RenderOptions { theme: cfg.theme(), draw_labels: cfg.draw_labels, ..RenderOptions::default() };
        let mut chart = Self::new(region, opts);
        chart.sampling_time_ms = cfg.sampling_time_ms;
        chart.precision = cfg.precision;
        chart.unit = cfg.unit.clone();
        chart.refresh_text();
        Ok(chart)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self.refresh_text();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self.refresh_text();
        self
    }

    pub fn value(&self) -> f64 { self.value }

    /// Text currently shown.
    pub fn text(&self) -> &str { &self.text }

    pub fn series(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.iter()
    }

    fn refresh_text(&mut self) {
        let number = match self.precision {
            Some(p) => format!("{:.*}", p, self.value),
            None => format!("{}", self.value),
        };
        self.text = match &self.unit {
            Some(u) if !u.is_empty() => format!("{number} {u}"),
            _ => number,
        };
    }
}

impl Widget for NumberChart {
    fn name(&self) -> &'static str { "Number chart" }

    fn push(&mut self, _id: &SeriesId, value: f64) {
        // -0.0 would print as "-0"
        self.value = if value.is_finite() && value != 0.0 { value } else { 0.0 };
        self.refresh_text();
    }

    fn add_data_type(&mut self, id: SeriesId) {
        self.series.insert(id);
    }

    fn remove_data_type(&mut self, id: &SeriesId) {
        if !self.series.remove(id) {
            tracing::debug!(series = %id, "remove for unknown series ignored");
        }
    }

    fn sampling_time(&self) -> u32 { self.sampling_time_ms }

    fn set_sampling_time(&mut self, ms: u32) -> Result<()> {
        validate_sampling_time(ms)?;
        self.sampling_time_ms = ms;
        Ok(())
    }

    fn has_period(&self) -> bool { false }

    fn region(&self) -> RectI32 { self.region }

    fn on_resize(&mut self, region: RectI32) {
        self.region = region;
    }

    fn draw(&self, canvas: &skia::Canvas, text: &TextShaper) {
        let theme = &self.opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(self.region.to_skia(), &bg);

        // drawn regardless of `draw_labels`
        // largest size that fits both the height and the width of the region
        let mut size = (self.region.height() as f32 * 0.6).max(8.0);
        let avail = (self.region.width() as f32 * 0.9).max(1.0);
        let w = text.measure_width(&self.text, size, true);
        if w > avail {
            size = (size * avail / w).max(8.0);
        }
        let cx = self.region.left as f32 + self.region.width() as f32 * 0.5;
        let baseline = self.region.top as f32 + self.region.height() as f32 * 0.5 + size * 0.35;
        text.draw_centered(canvas, &self.text, cx, baseline, size, theme.readout, true);
    }
}
