// File: crates/chart-highlight/src/options.rs
// Summary: Highlight configuration and animation phases read by the hit-testing code.

use crate::geometry::clamp;
use crate::types::DEFAULT_MAX_HIGHLIGHT_DISTANCE_DP;

/// Chart-level highlighting settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightOptions {
    /// Farthest a touch may be from a Cartesian value and still select it, in dp.
    pub max_highlight_distance_dp: f64,
    /// Device pixels per density-independent pixel.
    pub density: f64,
    pub highlight_per_tap_enabled: bool,
    pub highlight_per_drag_enabled: bool,
    /// Report whole bars instead of resolving the touched stack segment.
    pub highlight_full_bar: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            max_highlight_distance_dp: DEFAULT_MAX_HIGHLIGHT_DISTANCE_DP,
            density: 1.0,
            highlight_per_tap_enabled: true,
            highlight_per_drag_enabled: true,
            highlight_full_bar: false,
        }
    }
}

impl HighlightOptions {
    pub fn max_highlight_distance_px(&self) -> f64 {
        self.max_highlight_distance_dp * self.density
    }
}

/// Reveal-animation progress along x and y, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    phase_x: f64,
    phase_y: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self { phase_x: 1.0, phase_y: 1.0 }
    }
}

impl Animator {
    pub fn new(phase_x: f64, phase_y: f64) -> Self {
        let mut a = Self::default();
        a.set_phase_x(phase_x);
        a.set_phase_y(phase_y);
        a
    }

    pub fn phase_x(&self) -> f64 { self.phase_x }
    pub fn phase_y(&self) -> f64 { self.phase_y }

    pub fn set_phase_x(&mut self, phase: f64) {
        self.phase_x = if phase.is_nan() { 0.0 } else { clamp(phase, 0.0, 1.0) };
    }

    pub fn set_phase_y(&mut self, phase: f64) {
        self.phase_y = if phase.is_nan() { 0.0 } else { clamp(phase, 0.0, 1.0) };
    }
}
