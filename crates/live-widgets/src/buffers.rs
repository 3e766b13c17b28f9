// File: crates/live-widgets/src/buffers.rs
// Summary: Per-series sliding windows plus the shared y-axis maximum that spans them.
// Notes:
// - `max` is the displayed upper bound. It stays >= every stored sample; whenever
//   an operation could leave it stale it is recomputed from the live windows.
// - Unknown series ids are ignored, never reported.

use std::collections::BTreeMap;

use crate::error::{Result, WidgetError};
use crate::types::{SeriesId, MAX_CAPACITY};
use crate::window::{capacity_for, SampleWindow};

/// What a mutation asks the renderer to redo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing changed.
    None,
    /// Only the path of the pushed series changed.
    Series,
    /// The y-domain or the set of series changed; rebuild everything.
    All,
}

#[derive(Clone, Debug)]
pub struct SeriesBuffers {
    windows: BTreeMap<SeriesId, SampleWindow>,
    max: f64,
    period_secs: f64,
    sampling_time_ms: u32,
}

impl SeriesBuffers {
    pub fn new(period_secs: f64, sampling_time_ms: u32) -> Result<Self> {
        validate_window(period_secs, sampling_time_ms)?;
        Ok(Self { windows: BTreeMap::new(), max: 0.0, period_secs, sampling_time_ms })
    }

    /// Capacity of every window: `period / sampling_time * 1000`.
    pub fn amount_of_values(&self) -> usize {
        capacity_for(self.period_secs, self.sampling_time_ms)
    }

    pub fn period(&self) -> f64 { self.period_secs }
    pub fn sampling_time(&self) -> u32 { self.sampling_time_ms }

    /// Current displayed maximum (y-axis upper bound).
    pub fn max(&self) -> f64 { self.max }

    pub fn contains(&self, id: &SeriesId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn get(&self, id: &SeriesId) -> Option<&SampleWindow> {
        self.windows.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.windows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SeriesId, &SampleWindow)> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize { self.windows.len() }
    pub fn is_empty(&self) -> bool { self.windows.is_empty() }

    /// True maximum over every live window, or 0 when there are none.
    pub fn max_value_from_data(&self) -> f64 {
        self.windows
            .values()
            .filter_map(SampleWindow::max)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn push(&mut self, id: &SeriesId, value: f64) -> Redraw {
        let value = if value.is_finite() {
            value
        } else {
            tracing::debug!(series = %id, value, "non-finite sample stored as 0");
            0.0
        };
        let Some(window) = self.windows.get_mut(id) else {
            tracing::debug!(series = %id, "push for unknown series ignored");
            return Redraw::None;
        };
        let retained = window.capacity() > 0;
        let evicted = window.push(value);

        let mut redraw = Redraw::Series;
        if evicted == Some(self.max) {
            self.max = self.max_value_from_data();
            redraw = Redraw::All;
        }
        if retained && value > self.max {
            self.max = value;
            redraw = Redraw::All;
        }
        if redraw == Redraw::All {
            tracing::trace!(series = %id, max = self.max, "rescale");
        }
        redraw
    }

    /// Register `id` with a zero-filled window. Re-adding an existing id is a no-op.
    pub fn add_series(&mut self, id: SeriesId) -> Redraw {
        if self.windows.contains_key(&id) {
            tracing::debug!(series = %id, "series already tracked");
            return Redraw::None;
        }
        let capacity = self.amount_of_values();
        self.windows.insert(id, SampleWindow::zeroed(capacity));
        if capacity > 0 && self.max < 0.0 {
            self.max = 0.0;
        }
        Redraw::All
    }

    pub fn remove_series(&mut self, id: &SeriesId) -> Redraw {
        if self.windows.remove(id).is_none() {
            tracing::debug!(series = %id, "remove for unknown series ignored");
            return Redraw::None;
        }
        self.max = self.max_value_from_data();
        Redraw::All
    }

    /// Recompute capacity for a new period and truncate longer windows.
    /// Shorter windows are not padded back out.
    pub fn change_period(&mut self, period_secs: f64) -> Result<Redraw> {
        validate_window(period_secs, self.sampling_time_ms)?;
        self.period_secs = period_secs;
        Ok(self.apply_capacity())
    }

    pub fn set_sampling_time(&mut self, sampling_time_ms: u32) -> Result<Redraw> {
        validate_window(self.period_secs, sampling_time_ms)?;
        self.sampling_time_ms = sampling_time_ms;
        Ok(self.apply_capacity())
    }

    fn apply_capacity(&mut self) -> Redraw {
        let capacity = self.amount_of_values();
        let dropped: usize = self.windows.values_mut().map(|w| w.set_capacity(capacity)).sum();
        if dropped > 0 {
            tracing::debug!(capacity, dropped, "windows truncated");
            self.max = self.max_value_from_data();
        }
        Redraw::All
    }
}

/// Period and sampling time must each be valid and together stay within [`MAX_CAPACITY`].
pub(crate) fn validate_window(period_secs: f64, sampling_time_ms: u32) -> Result<()> {
    validate_period(period_secs)?;
    validate_sampling_time(sampling_time_ms)?;
    let samples = period_secs * 1000.0 / sampling_time_ms as f64;
    if samples > MAX_CAPACITY as f64 {
        return Err(WidgetError::InvalidPeriod(period_secs));
    }
    Ok(())
}

fn validate_period(period_secs: f64) -> Result<()> {
    if period_secs.is_finite() && period_secs > 0.0 {
        Ok(())
    } else {
        Err(WidgetError::InvalidPeriod(period_secs))
    }
}

pub(crate) fn validate_sampling_time(sampling_time_ms: u32) -> Result<()> {
    if sampling_time_ms == 0 {
        Err(WidgetError::InvalidSamplingTime)
    } else {
        Ok(())
    }
}
