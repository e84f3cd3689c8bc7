// File: crates/chart-highlight/src/highlighter/combined.rs
// Summary: Hit-testing across the data objects of a combined chart.

use tracing::trace;

use crate::data::{ChartData, CombinedData, SubData};
use crate::entry::ChartEntry;
use crate::geometry::Point;
use crate::highlight::Highlight;

use super::bar;
use super::cartesian::{Cartesian, DistanceMetric};

/// Appends one candidate per sub data and data set at the touched x, each
/// tagged with its data index. Bar data contributes its fully resolved bar
/// highlight (stack segment included) rather than raw candidates.
pub(crate) fn gather(
    ctx: &Cartesian<'_>,
    data: &CombinedData,
    touch: Point,
    full_bar: bool,
    out: &mut Vec<Highlight>,
    bar_buffer: &mut Vec<Highlight>,
) {
    let x_val = ctx.x_value_for_touch(touch);
    for (data_index, sub) in data.all_data().enumerate() {
        match sub {
            SubData::Bar(d) => {
                let bar_ctx = Cartesian { metric: DistanceMetric::Horizontal, ..*ctx };
                if let Some(h) = bar::highlight(&bar_ctx, d, touch, full_bar, bar_buffer) {
                    out.push(h.with_data_index(data_index));
                }
            }
            SubData::Line(d) | SubData::Scatter(d) => gather_tagged(ctx, d, x_val, data_index, out),
            SubData::Candle(d) => gather_tagged(ctx, d, x_val, data_index, out),
            SubData::Bubble(d) => gather_tagged(ctx, d, x_val, data_index, out),
        }
    }
}

fn gather_tagged<E: ChartEntry>(ctx: &Cartesian<'_>, data: &ChartData<E>, x_val: f64, data_index: usize, out: &mut Vec<Highlight>) {
    let start = out.len();
    ctx.highlights_at_x_value(data, x_val, out);
    for h in &mut out[start..] {
        h.data_index = Some(data_index);
    }
}

pub(crate) fn highlight(
    ctx: &Cartesian<'_>,
    data: &CombinedData,
    touch: Point,
    full_bar: bool,
    buffer: &mut Vec<Highlight>,
    bar_buffer: &mut Vec<Highlight>,
) -> Option<Highlight> {
    buffer.clear();
    gather(ctx, data, touch, full_bar, buffer, bar_buffer);
    trace!(candidates = buffer.len(), "gathered combined candidates");
    ctx.select(buffer, touch)
}
