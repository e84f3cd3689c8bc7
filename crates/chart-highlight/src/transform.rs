// File: crates/chart-highlight/src/transform.rs
// Summary: Data <-> pixel transformer per y-axis, for vertical and horizontal chart layouts.

use crate::axis::{Axis, AxisDependency};
use crate::error::ChartError;
use crate::geometry::{Point, Rect};
use crate::scale::AxisScale;

/// Maps value pairs onto the screen and back.
///
/// The first component of a value pair is laid along the horizontal screen
/// axis and the second along the vertical one. Vertical charts pass
/// `(x, y)`; horizontal bar charts are built with [`Transformer::horizontal`]
/// and pass `(y, x)`.
#[derive(Clone, Copy, Debug)]
pub struct Transformer {
    pub horizontal: AxisScale,
    pub vertical: AxisScale,
}

impl Transformer {
    pub fn new(horizontal: AxisScale, vertical: AxisScale) -> Self {
        Self { horizontal, vertical }
    }

    /// Vertical layout: `x_axis` runs left to right, `y_axis` bottom to top.
    pub fn vertical(x_axis: &Axis, y_axis: &Axis, content: Rect) -> Result<Self, ChartError> {
        validate(content, &[x_axis, y_axis])?;
        Ok(Self::new(
            AxisScale::for_axis(x_axis, content.left, content.right),
            AxisScale::for_axis(y_axis, content.bottom, content.top),
        ))
    }

    /// Horizontal bar layout: `y_axis` (values) runs left to right and
    /// `x_axis` (categories) bottom to top.
    pub fn horizontal(x_axis: &Axis, y_axis: &Axis, content: Rect) -> Result<Self, ChartError> {
        validate(content, &[x_axis, y_axis])?;
        Ok(Self::new(
            AxisScale::for_axis(y_axis, content.left, content.right),
            AxisScale::for_axis(x_axis, content.bottom, content.top),
        ))
    }

    #[inline]
    pub fn value_to_pixel(&self, a: f64, b: f64) -> Point {
        Point::new(self.horizontal.to_px(a), self.vertical.to_px(b))
    }

    #[inline]
    pub fn pixel_to_value(&self, px: f64, py: f64) -> Point {
        Point::new(self.horizontal.from_px(px), self.vertical.from_px(py))
    }
}

fn validate(content: Rect, axes: &[&Axis]) -> Result<(), ChartError> {
    if content.is_empty() {
        return Err(ChartError::EmptyContent { width: content.width(), height: content.height() });
    }
    for axis in axes {
        if !axis.is_finite() {
            return Err(ChartError::NonFiniteAxis { label: axis.label.clone(), min: axis.min, max: axis.max });
        }
    }
    Ok(())
}

/// One transformer per y-axis; the x mapping is shared.
#[derive(Clone, Copy, Debug)]
pub struct AxisTransformers {
    pub left: Transformer,
    pub right: Transformer,
}

impl AxisTransformers {
    pub fn new(left: Transformer, right: Transformer) -> Self {
        Self { left, right }
    }

    /// Both axes share the same mapping.
    pub fn shared(t: Transformer) -> Self {
        Self::new(t, t)
    }

    pub fn get(&self, axis: AxisDependency) -> &Transformer {
        match axis {
            AxisDependency::Left => &self.left,
            AxisDependency::Right => &self.right,
        }
    }

    /// Vertical layout with independent left and right y-axes.
    pub fn vertical(x_axis: &Axis, left: &Axis, right: &Axis, content: Rect) -> Result<Self, ChartError> {
        Ok(Self::new(
            Transformer::vertical(x_axis, left, content)?,
            Transformer::vertical(x_axis, right, content)?,
        ))
    }

    /// Horizontal bar layout with independent left and right value axes.
    pub fn horizontal(x_axis: &Axis, left: &Axis, right: &Axis, content: Rect) -> Result<Self, ChartError> {
        Ok(Self::new(
            Transformer::horizontal(x_axis, left, content)?,
            Transformer::horizontal(x_axis, right, content)?,
        ))
    }
}
