// File: crates/chart-highlight/src/scale.rs
// Summary: Linear and log10 value scales mapping a data range onto a pixel interval.

use crate::axis::{Axis, ScaleKind};

/// Data-space value along one axis.
pub type Value = f64;

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`.
///
/// `start_px` is where `vmin` lands, so a y-axis that grows upward uses
/// `start_px = bottom` and `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f64,
    pub end_px: f64,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_px: f64, end_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f64, end_px: f64, mut vmin: Value, mut vmax: Value) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    /// Scale for `axis` laid over the pixel interval `[start_px, end_px]`.
    pub fn for_axis(axis: &Axis, start_px: f64, end_px: f64) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
        }
    }

    #[inline]
    fn px_span(&self) -> f64 {
        self.end_px - self.start_px
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f64 {
        if self.log {
            let vv = v.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.start_px + (vv - self.log_min) / span * self.px_span()
        } else {
            let span = self.vmax - self.vmin;
            self.start_px + (v - self.vmin) / span * self.px_span()
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> Value {
        let frac = if self.px_span().abs() < 1e-12 { 0.0 } else { (px - self.start_px) / self.px_span() };
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            10f64.powf(self.log_min + frac * span)
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }
}
