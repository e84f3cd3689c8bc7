// File: crates/chart-highlight/src/highlight.rs
// Summary: Result record of a touch hit-test: data and pixel position plus owning indices.

use crate::axis::AxisDependency;

/// One highlighted value.
///
/// Equality only looks at `x`, `y`, `data_set_index` and `stack_index`, so a
/// second tap on the same value compares equal even if the pixel position
/// moved. That is what tap-to-deselect relies on.
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    /// Data-space x of the highlighted entry.
    pub x: f64,
    /// Data-space y of the highlighted entry; NaN means "any y at this x".
    pub y: f64,
    pub x_px: f64,
    pub y_px: f64,
    pub data_set_index: usize,
    /// Position of the sub data inside a combined chart.
    pub data_index: Option<usize>,
    /// Segment of a stacked bar, `None` when the bar is not stacked or not resolved.
    pub stack_index: Option<usize>,
    pub axis: AxisDependency,
}

impl Highlight {
    pub fn new(x: f64, y: f64, x_px: f64, y_px: f64, data_set_index: usize, axis: AxisDependency) -> Self {
        Self { x, y, x_px, y_px, data_set_index, data_index: None, stack_index: None, axis }
    }

    /// Highlight created from code rather than from a touch; pixels are unknown.
    pub fn at(x: f64, y: f64, data_set_index: usize) -> Self {
        Self::new(x, y, f64::NAN, f64::NAN, data_set_index, AxisDependency::Left)
    }

    pub fn with_stack_index(mut self, stack_index: Option<usize>) -> Self {
        self.stack_index = stack_index;
        self
    }

    pub fn with_data_index(mut self, data_index: usize) -> Self {
        self.data_index = Some(data_index);
        self
    }

    pub fn is_stacked(&self) -> bool {
        self.stack_index.is_some()
    }
}

impl PartialEq for Highlight {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.data_set_index == other.data_set_index
            && self.stack_index == other.stack_index
    }
}
