// File: crates/live-widgets/src/legend.rs
// Summary: Legend entries resolved from the series catalog, and their drawing.

use skia_safe as skia;

use crate::metadata::SeriesCatalog;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::SeriesId;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub id: SeriesId,
    pub label: String,
    pub color: skia::Color,
}

/// One entry per id, in the iteration order given. Unknown ids show their raw id
/// in the theme's default stroke color.
pub fn build<'a>(ids: impl IntoIterator<Item = &'a SeriesId>, catalog: &dyn SeriesCatalog, theme: &Theme) -> Vec<LegendEntry> {
    ids.into_iter()
        .map(|id| match catalog.describe(id) {
            Some(info) => LegendEntry { id: id.clone(), label: info.label, color: info.color },
            None => LegendEntry { id: id.clone(), label: id.to_string(), color: theme.line_stroke },
        })
        .collect()
}

const SWATCH: f32 = 10.0;
const ROW: f32 = 18.0;

/// Draw entries top-down starting at `(x, y)`: a color swatch and, if enabled, the label.
pub fn draw(
    canvas: &skia::Canvas,
    entries: &[LegendEntry],
    x: f32,
    y: f32,
    text: &TextShaper,
    theme: &Theme,
    draw_labels: bool,
    label_size: f32,
) {
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);

    for (i, e) in entries.iter().enumerate() {
        let top = y + i as f32 * ROW;
        swatch.set_color(e.color);
        canvas.draw_rect(skia::Rect::from_xywh(x, top, SWATCH, SWATCH), &swatch);
        if draw_labels {
            text.draw_left(canvas, &e.label, x + SWATCH + 6.0, top + SWATCH, label_size, theme.legend_text, false);
        }
    }
}
