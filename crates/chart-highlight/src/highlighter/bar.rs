// File: crates/chart-highlight/src/highlighter/bar.rs
// Summary: Bar hit-testing (vertical and horizontal) with stacked segment resolution.

use tracing::{debug, trace};

use crate::data::BarData;
use crate::dataset::{DataSet, Rounding};
use crate::entry::{BarEntry, ChartEntry};
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::range::Range;

use super::cartesian::Cartesian;

/// Hit-tests bar data, then narrows a stacked bar down to the touched segment.
///
/// With `full_bar` the segment is still resolved for the pixel position but
/// the returned highlight carries no stack index.
pub(crate) fn highlight(ctx: &Cartesian<'_>, data: &BarData, touch: Point, full_bar: bool, buffer: &mut Vec<Highlight>) -> Option<Highlight> {
    let high = ctx.highlight(data, touch, buffer)?;
    let set = data.data_set(high.data_set_index)?;
    let high = if set.is_stacked() {
        let values = ctx.values_for_touch_on(set.axis_dependency(), touch);
        stacked_highlight(ctx, high, set, values.x, values.y)?
    } else {
        high
    };
    Some(if full_bar { high.with_stack_index(None) } else { high })
}

/// Resolves the stack segment of the bar at `(x_val, y_val)` in data space.
pub(crate) fn stacked_highlight(ctx: &Cartesian<'_>, high: Highlight, set: &DataSet<BarEntry>, x_val: f64, y_val: f64) -> Option<Highlight> {
    let entry = set.entry_for_x_value(x_val, Some(y_val), Rounding::Closest)?;
    if entry.y_vals().is_none() {
        return Some(high);
    }
    let ranges = entry.ranges();
    if ranges.is_empty() {
        debug!(x = entry.x(), "stacked bar entry without ranges");
        return Some(high.with_stack_index(Some(0)));
    }
    let index = closest_stack_index(ranges, y_val);
    let px = ctx.pixel_for(set.axis_dependency(), high.x, ranges[index].to);
    trace!(x = entry.x(), y_val, stack_index = index, "resolved stack segment");
    Some(
        Highlight::new(entry.x(), entry.y(), px.x, px.y, high.data_set_index, high.axis)
            .with_stack_index(Some(index)),
    )
}

/// Segment whose band holds `value`; past the top of the stack the last one,
/// below the bottom (or with no bands at all) the first.
pub fn closest_stack_index(ranges: &[Range], value: f64) -> usize {
    if let Some(i) = ranges.iter().position(|r| r.contains(value)) {
        return i;
    }
    match ranges.last() {
        Some(last) if value > last.to => ranges.len() - 1,
        _ => 0,
    }
}
