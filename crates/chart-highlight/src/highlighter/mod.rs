// File: crates/chart-highlight/src/highlighter/mod.rs
// Summary: Highlighter entry point; dispatches a touch to the hit-test for the chart's kind.

mod bar;
mod cartesian;
mod combined;
mod radial;

pub use bar::closest_stack_index;
pub use cartesian::{DistanceMetric, Orientation};

use tracing::debug;

use crate::chart::{Chart, ChartKind};
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::transform::AxisTransformers;

use cartesian::Cartesian;

/// Turns touch positions into highlights.
///
/// Holds scratch buffers reused across calls, so keep one per chart view
/// instead of creating a new one for every touch.
#[derive(Debug, Default)]
pub struct Highlighter {
    buffer: Vec<Highlight>,
    bar_buffer: Vec<Highlight>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight for a touch in view pixels, or `None` when nothing is close enough.
    pub fn highlight(&mut self, chart: &Chart, touch: Point) -> Option<Highlight> {
        let max_distance = chart.options.max_highlight_distance_px();
        let full_bar = chart.options.highlight_full_bar;
        let hit = match &chart.kind {
            ChartKind::Line { data, transformers } | ChartKind::Scatter { data, transformers } => {
                euclidean(transformers, max_distance).highlight(data, touch, &mut self.buffer)
            }
            ChartKind::Candle { data, transformers } => euclidean(transformers, max_distance).highlight(data, touch, &mut self.buffer),
            ChartKind::Bubble { data, transformers } => euclidean(transformers, max_distance).highlight(data, touch, &mut self.buffer),
            ChartKind::Bar { data, transformers } => {
                let ctx = Cartesian::new(transformers, max_distance, Orientation::Vertical, DistanceMetric::Horizontal);
                bar::highlight(&ctx, data, touch, full_bar, &mut self.buffer)
            }
            ChartKind::HorizontalBar { data, transformers } => {
                let ctx = Cartesian::new(transformers, max_distance, Orientation::Horizontal, DistanceMetric::Vertical);
                bar::highlight(&ctx, data, touch, full_bar, &mut self.buffer)
            }
            ChartKind::Combined { data, transformers } => {
                let ctx = euclidean(transformers, max_distance);
                combined::highlight(&ctx, data, touch, full_bar, &mut self.buffer, &mut self.bar_buffer)
            }
            ChartKind::Pie { data, geometry } => radial::pie(data, geometry, &chart.animator, touch),
            ChartKind::Radar { data, geometry } => radial::radar(data, geometry, &chart.animator, touch, &mut self.buffer),
        };
        debug!(touch_x = touch.x, touch_y = touch.y, hit = hit.is_some(), "highlight by touch");
        hit
    }

    /// Every candidate the hit-test considers for a touch, before the closest
    /// one is chosen. Cartesian charts report the candidates at the touched x,
    /// radar charts those on the touched spoke, and pie charts at most the
    /// touched slice.
    pub fn candidates(&mut self, chart: &Chart, touch: Point) -> &[Highlight] {
        let max_distance = chart.options.max_highlight_distance_px();
        self.buffer.clear();
        match &chart.kind {
            ChartKind::Line { data, transformers } | ChartKind::Scatter { data, transformers } => {
                let ctx = euclidean(transformers, max_distance);
                ctx.highlights_at_x_value(data, ctx.x_value_for_touch(touch), &mut self.buffer);
            }
            ChartKind::Candle { data, transformers } => {
                let ctx = euclidean(transformers, max_distance);
                ctx.highlights_at_x_value(data, ctx.x_value_for_touch(touch), &mut self.buffer);
            }
            ChartKind::Bubble { data, transformers } => {
                let ctx = euclidean(transformers, max_distance);
                ctx.highlights_at_x_value(data, ctx.x_value_for_touch(touch), &mut self.buffer);
            }
            ChartKind::Bar { data, transformers } => {
                let ctx = Cartesian::new(transformers, max_distance, Orientation::Vertical, DistanceMetric::Horizontal);
                ctx.highlights_at_x_value(data, ctx.x_value_for_touch(touch), &mut self.buffer);
            }
            ChartKind::HorizontalBar { data, transformers } => {
                let ctx = Cartesian::new(transformers, max_distance, Orientation::Horizontal, DistanceMetric::Vertical);
                ctx.highlights_at_x_value(data, ctx.x_value_for_touch(touch), &mut self.buffer);
            }
            ChartKind::Combined { data, transformers } => {
                let ctx = euclidean(transformers, max_distance);
                combined::gather(&ctx, data, touch, chart.options.highlight_full_bar, &mut self.buffer, &mut self.bar_buffer);
            }
            ChartKind::Pie { data, geometry } => {
                if let Some(h) = radial::pie(data, geometry, &chart.animator, touch) {
                    self.buffer.push(h);
                }
            }
            ChartKind::Radar { data, geometry } => {
                if let Some(index) = radial::radar_index(data, geometry, &chart.animator, touch) {
                    radial::highlights_at_index(data, geometry, &chart.animator, index, &mut self.buffer);
                }
            }
        }
        &self.buffer
    }
}

fn euclidean(transformers: &AxisTransformers, max_distance: f64) -> Cartesian<'_> {
    Cartesian::new(transformers, max_distance, Orientation::Vertical, DistanceMetric::Euclidean)
}
