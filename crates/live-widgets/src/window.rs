// File: crates/live-widgets/src/window.rs
// Summary: Fixed-capacity sliding window of samples for one series.

use std::collections::VecDeque;

/// Number of samples that cover `period_secs` when one arrives every `sampling_time_ms`.
/// Fractional results are floored.
pub fn capacity_for(period_secs: f64, sampling_time_ms: u32) -> usize {
    if sampling_time_ms == 0 || !period_secs.is_finite() || period_secs <= 0.0 {
        return 0;
    }
    // multiply first: 6 * 1000 / 10 is exact where 6 / 10 * 1000 is not
    ((period_secs * 1000.0) / sampling_time_ms as f64 + 1e-9).floor() as usize
}

/// Oldest sample at the front, newest at the back.
/// Contract: `len() <= capacity()` after every operation.
#[derive(Clone, Debug)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SampleWindow {
    /// A full window of zeros, the state a freshly added series starts in.
    pub fn zeroed(capacity: usize) -> Self {
        Self { samples: std::iter::repeat(0.0).take(capacity).collect(), capacity }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `value`, returning the sample evicted to make room, if any.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front()
        } else {
            None
        }
    }

    /// Change capacity. Shrinking drops the oldest samples; growing leaves the
    /// window short until new pushes fill it. Returns the number of samples dropped.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity;
        let excess = self.samples.len().saturating_sub(capacity);
        self.samples.drain(..excess);
        excess
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
