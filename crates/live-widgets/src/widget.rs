// File: crates/live-widgets/src/widget.rs
// Summary: Capability set shared by every widget, plus per-widget render options.

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, SeriesId};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Axis ticks and legend text. Off in pixel tests; font availability
    /// differs across machines. A number readout is always drawn.
    pub draw_labels: bool,
    pub label_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { insets: Insets::default(), theme: Theme::dark(), draw_labels: true, label_size: 12.0 }
    }
}

/// Operations a data feed drives a widget with.
///
/// Feeds only ever see `dyn Widget`; whether the widget buffers history is
/// discoverable through [`Widget::has_period`].
pub trait Widget {
    /// Human-readable widget kind.
    fn name(&self) -> &'static str;

    /// Deliver one sample for `id`. Unknown ids are ignored.
    fn push(&mut self, id: &SeriesId, value: f64);

    /// Start tracking `id`.
    fn add_data_type(&mut self, id: SeriesId);

    /// Stop tracking `id`. Unknown ids are ignored.
    fn remove_data_type(&mut self, id: &SeriesId);

    /// Milliseconds between samples.
    fn sampling_time(&self) -> u32;

    fn set_sampling_time(&mut self, ms: u32) -> Result<()>;

    /// True when the widget keeps a time window and honours [`Widget::change_period`].
    fn has_period(&self) -> bool;

    /// Change the displayed history in seconds. No-op for widgets without a period.
    fn change_period(&mut self, _period_secs: f64) -> Result<()> {
        Ok(())
    }

    /// The surface region the widget draws into.
    fn region(&self) -> RectI32;

    /// The mount point changed size; recompute layout.
    fn on_resize(&mut self, region: RectI32);

    fn draw(&self, canvas: &skia::Canvas, text: &TextShaper);
}
