// File: crates/live-widgets/src/axis.rs
// Summary: Axis model with labels, ranges and tick generation.

use crate::grid::{linspace, tick_label};

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: 6 }
    }

    /// Relative time axis: `-period` seconds at the left edge, `0` ("now") at the right.
    pub fn time(period_secs: f64) -> Self {
        Self::new("s", -period_secs, 0.0)
    }

    pub fn value(label: impl Into<String>, max: f64) -> Self {
        Self::new(label, 0.0, max)
    }

    /// Tick positions in axis units paired with their text.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        linspace(self.min, self.max, self.ticks)
            .into_iter()
            .map(|v| (v, tick_label(v)))
            .collect()
    }
}
