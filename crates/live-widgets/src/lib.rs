// File: crates/live-widgets/src/lib.rs
// Summary: Library entry point; exports the widget trait, both widgets and their supporting types.

pub mod axis;
pub mod buffers;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod line_chart;
pub mod metadata;
pub mod number_chart;
pub mod scale;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;
pub mod widget;
pub mod window;

pub use axis::Axis;
pub use buffers::{Redraw, SeriesBuffers};
pub use config::{SeriesConfig, WidgetConfig};
pub use error::{Result, WidgetError};
pub use geometry::RectI32;
pub use legend::LegendEntry;
pub use line_chart::LineChart;
pub use metadata::{EmptyCatalog, MetadataTable, SeriesCatalog, SeriesInfo};
pub use number_chart::NumberChart;
pub use surface::RenderSurface;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, SeriesId};
pub use widget::{RenderOptions, Widget};
pub use window::{capacity_for, SampleWindow};
