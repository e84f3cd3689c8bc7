// File: crates/chart-highlight/src/highlighter/cartesian.rs
// Summary: Shared Cartesian hit-testing: x lookup, candidate gathering, axis choice, closest-pixel selection.

use tracing::trace;

use crate::axis::AxisDependency;
use crate::data::ChartData;
use crate::dataset::{DataSet, Rounding};
use crate::entry::ChartEntry;
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::transform::AxisTransformers;

/// Which screen axis carries the data x-values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// x runs along the screen's horizontal axis (line, vertical bars, ...).
    Vertical,
    /// x runs along the screen's vertical axis (horizontal bars).
    Horizontal,
}

/// How far a touch is from a candidate, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Straight-line distance.
    Euclidean,
    /// Horizontal offset only; selects whole columns.
    Horizontal,
    /// Vertical offset only; selects whole rows.
    Vertical,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, touch: Point, candidate: Point) -> f64 {
        match self {
            DistanceMetric::Euclidean => touch.distance(candidate),
            DistanceMetric::Horizontal => (touch.x - candidate.x).abs(),
            DistanceMetric::Vertical => (touch.y - candidate.y).abs(),
        }
    }
}

/// Parameters of one Cartesian hit-test.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cartesian<'a> {
    pub transformers: &'a AxisTransformers,
    pub max_distance: f64,
    pub orientation: Orientation,
    pub metric: DistanceMetric,
}

impl<'a> Cartesian<'a> {
    pub fn new(transformers: &'a AxisTransformers, max_distance: f64, orientation: Orientation, metric: DistanceMetric) -> Self {
        Self { transformers, max_distance, orientation, metric }
    }

    /// Data-space `(x, y)` under the touch as seen by `axis`.
    pub fn values_for_touch_on(&self, axis: AxisDependency, touch: Point) -> Point {
        let v = self.transformers.get(axis).pixel_to_value(touch.x, touch.y);
        match self.orientation {
            Orientation::Vertical => v,
            Orientation::Horizontal => Point::new(v.y, v.x),
        }
    }

    /// Data-space x under the touch. The x mapping is shared, so the left axis answers for both.
    pub fn x_value_for_touch(&self, touch: Point) -> f64 {
        self.values_for_touch_on(AxisDependency::Left, touch).x
    }

    /// Pixel position of the data point `(x, y)` plotted against `axis`.
    pub fn pixel_for(&self, axis: AxisDependency, x: f64, y: f64) -> Point {
        let t = self.transformers.get(axis);
        match self.orientation {
            Orientation::Vertical => t.value_to_pixel(x, y),
            Orientation::Horizontal => t.value_to_pixel(y, x),
        }
    }

    /// One candidate per entry at `x_val`, or at the closest x present in `set`.
    pub fn build_highlights<E: ChartEntry>(&self, set: &DataSet<E>, data_set_index: usize, x_val: f64, out: &mut Vec<Highlight>) {
        let mut entries = set.entries_for_x_value(x_val);
        if entries.is_empty() {
            if let Some(closest) = set.entry_for_x_value(x_val, None, Rounding::Closest) {
                entries = set.entries_for_x_value(closest.x());
            }
        }
        let axis = set.axis_dependency();
        for e in entries {
            let px = self.pixel_for(axis, e.x(), e.y());
            out.push(Highlight::new(e.x(), e.y(), px.x, px.y, data_set_index, axis));
        }
    }

    /// Appends the candidates of every highlight-enabled data set, in data set order.
    pub fn highlights_at_x_value<E: ChartEntry>(&self, data: &ChartData<E>, x_val: f64, out: &mut Vec<Highlight>) {
        for (i, set) in data.data_sets().iter().enumerate() {
            if !set.is_highlight_enabled() {
                continue;
            }
            self.build_highlights(set, i, x_val, out);
        }
    }

    /// Full hit-test against one chart data object; `buffer` is scratch space.
    pub fn highlight<E: ChartEntry>(&self, data: &ChartData<E>, touch: Point, buffer: &mut Vec<Highlight>) -> Option<Highlight> {
        buffer.clear();
        let x_val = self.x_value_for_touch(touch);
        self.highlights_at_x_value(data, x_val, buffer);
        trace!(x_val, candidates = buffer.len(), "gathered highlight candidates");
        self.select(buffer, touch)
    }

    /// Picks the active axis, then the closest candidate on it within the distance limit.
    pub fn select(&self, candidates: &[Highlight], touch: Point) -> Option<Highlight> {
        if candidates.is_empty() {
            return None;
        }
        let left = self.min_axis_distance(candidates, touch, AxisDependency::Left);
        let right = self.min_axis_distance(candidates, touch, AxisDependency::Right);
        let axis = if left < right { AxisDependency::Left } else { AxisDependency::Right };
        self.closest_by_pixel(candidates, touch, axis)
    }

    /// Closest candidate bound to `axis`, strictly within `max_distance`.
    pub fn closest_by_pixel(&self, candidates: &[Highlight], touch: Point, axis: AxisDependency) -> Option<Highlight> {
        let mut closest = None;
        let mut distance = self.max_distance;
        for h in candidates {
            if h.axis != axis {
                continue;
            }
            let d = self.metric.distance(touch, Point::new(h.x_px, h.y_px));
            if d < distance {
                closest = Some(*h);
                distance = d;
            }
        }
        if closest.is_none() {
            trace!(max_distance = self.max_distance, "no candidate within highlight distance");
        }
        closest
    }

    /// Smallest gap between the touch and a candidate of `axis`, measured along the value direction.
    fn min_axis_distance(&self, candidates: &[Highlight], touch: Point, axis: AxisDependency) -> f64 {
        candidates
            .iter()
            .filter(|h| h.axis == axis)
            .map(|h| match self.orientation {
                Orientation::Vertical => (h.y_px - touch.y).abs(),
                Orientation::Horizontal => (h.x_px - touch.x).abs(),
            })
            .fold(f64::MAX, f64::min)
    }
}
