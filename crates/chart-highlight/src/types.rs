// File: crates/chart-highlight/src/types.rs
// Summary: Shared types and constants (highlight distance, angles, content insets).

/// Default touch radius for Cartesian highlighting, in density-independent pixels.
pub const DEFAULT_MAX_HIGHLIGHT_DISTANCE_DP: f64 = 100.0;
/// Default rotation of pie and radar charts, in degrees (270 points north).
pub const DEFAULT_ROTATION_ANGLE: f64 = 270.0;
/// Degrees in a full turn.
pub const FULL_CIRCLE: f64 = 360.0;

/// Screen margins around the content area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(0)
    }
}
