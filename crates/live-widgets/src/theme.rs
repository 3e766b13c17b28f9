// File: crates/live-widgets/src/theme.rs
// Summary: Light/Dark theming for widget rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub legend_text: skia::Color,
    /// Stroke for series the catalog knows nothing about.
    pub line_stroke: skia::Color,
    pub readout: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            readout: skia::Color::from_argb(255, 240, 240, 250),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            legend_text: skia::Color::from_argb(255, 40, 40, 50),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            readout: skia::Color::from_argb(255, 10, 10, 20),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::debug!(name, "unknown theme, using dark");
    Theme::dark()
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}
