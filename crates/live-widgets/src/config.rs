// File: crates/live-widgets/src/config.rs
// Summary: TOML-backed widget configuration and series metadata table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::buffers::validate_window;
use crate::error::Result;
use crate::metadata::{parse_hex_color, MetadataTable};
use crate::theme::{self, Theme};
use crate::types::{SeriesId, DEFAULT_PERIOD_SECS, DEFAULT_SAMPLING_TIME_MS};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub sampling_time_ms: u32,
    pub period_secs: f64,
    pub theme: String,
    /// Fraction digits for the number readout; `None` prints the shortest exact form.
    pub precision: Option<usize>,
    pub unit: Option<String>,
    pub y_label: String,
    pub draw_labels: bool,
    pub series: Vec<SeriesConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub id: SeriesId,
    pub name: String,
    pub color: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            sampling_time_ms: DEFAULT_SAMPLING_TIME_MS,
            period_secs: DEFAULT_PERIOD_SECS,
            theme: "dark".to_string(),
            precision: None,
            unit: None,
            y_label: String::new(),
            draw_labels: true,
            series: Vec::new(),
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), series = cfg.series.len(), "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_window(self.period_secs, self.sampling_time_ms)?;
        for s in &self.series {
            if let Some(c) = &s.color {
                parse_hex_color(c)?;
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    /// Series metadata from the `[[series]]` table; entries without a color use the theme stroke.
    pub fn catalog(&self) -> Result<MetadataTable> {
        let fallback = self.theme().line_stroke;
        let mut table = MetadataTable::new();
        for s in &self.series {
            let color = match &s.color {
                Some(c) => parse_hex_color(c)?,
                None => fallback,
            };
            table.insert(s.id.clone(), s.name.clone(), color);
        }
        Ok(table)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.iter().map(|s| &s.id)
    }
}
