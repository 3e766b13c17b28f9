// File: crates/live-widgets/src/scale.rs
// Summary: Linear domain-to-pixel scale used for both chart axes.

/// Maps a numeric domain `[d0, d1]` onto a pixel range `[r0, r1]`.
/// `r0 > r1` is fine (a y-axis runs bottom to top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut s = Self { d0: 0.0, d1: 1.0, r0: range.0, r1: range.1 };
        s.set_domain(domain.0, domain.1);
        s
    }

    /// Replace the domain. A degenerate span is widened by 1 so mapping stays finite.
    pub fn set_domain(&mut self, d0: f64, d1: f64) {
        self.d0 = d0;
        self.d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
    }

    pub fn set_range(&mut self, r0: f32, r1: f32) {
        self.r0 = r0;
        self.r1 = r1;
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t as f32 * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.r1 - self.r0;
        if span.abs() < f32::EPSILON {
            return self.d0;
        }
        self.d0 + ((px - self.r0) / span) as f64 * (self.d1 - self.d0)
    }
}
