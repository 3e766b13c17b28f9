// File: crates/live-widgets/src/metadata.rs
// Summary: Series metadata lookup (display color + label) consumed by the legend.

use std::collections::HashMap;

use skia_safe as skia;

use crate::error::{Result, WidgetError};
use crate::types::SeriesId;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesInfo {
    pub label: String,
    pub color: skia::Color,
}

/// Provides display metadata for series ids. Implemented by whoever owns the feed.
pub trait SeriesCatalog {
    fn describe(&self, id: &SeriesId) -> Option<SeriesInfo>;
}

/// Catalog with nothing in it; every series falls back to theme defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCatalog;

impl SeriesCatalog for EmptyCatalog {
    fn describe(&self, _id: &SeriesId) -> Option<SeriesInfo> { None }
}

/// In-memory catalog, usually filled from the `[[series]]` config table.
#[derive(Clone, Debug, Default)]
pub struct MetadataTable {
    entries: HashMap<SeriesId, SeriesInfo>,
}

impl MetadataTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<SeriesId>, label: impl Into<String>, color: skia::Color) {
        self.entries.insert(id.into(), SeriesInfo { label: label.into(), color });
    }

    pub fn with(mut self, id: impl Into<SeriesId>, label: impl Into<String>, color: skia::Color) -> Self {
        self.insert(id, label, color);
        self
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl SeriesCatalog for MetadataTable {
    fn describe(&self, id: &SeriesId) -> Option<SeriesInfo> {
        self.entries.get(id).cloned()
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<skia::Color> {
    let bad = || WidgetError::InvalidColor(s.to_string());
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(skia::Color::from_argb(a, r, g, b))
}
