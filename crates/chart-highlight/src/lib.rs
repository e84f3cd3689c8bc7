// File: crates/chart-highlight/src/lib.rs
// Summary: Library entry point; exports the public API for chart data, transformers, and touch highlighting.

pub mod axis;
pub mod chart;
pub mod data;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod highlighter;
pub mod options;
pub mod radial;
pub mod range;
pub mod scale;
pub mod selection;
pub mod transform;
pub mod types;

pub use axis::{Axis, AxisDependency, ScaleKind};
pub use chart::{Chart, ChartKind};
pub use data::{BarData, BubbleData, CandleData, ChartData, CombinedData, LineData, PieData, RadarData, ScatterData, SubData};
pub use dataset::{DataSet, Rounding};
pub use entry::{BarEntry, BubbleEntry, CandleEntry, ChartEntry, Entry, PieEntry, RadarEntry};
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use highlight::Highlight;
pub use highlighter::{closest_stack_index, DistanceMetric, Highlighter, Orientation};
pub use options::{Animator, HighlightOptions};
pub use radial::{PieGeometry, PieLayout, RadarGeometry};
pub use range::Range;
pub use selection::{Selection, SelectionChange};
pub use transform::{AxisTransformers, Transformer};
pub use types::Insets;
