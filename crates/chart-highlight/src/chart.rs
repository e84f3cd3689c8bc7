// File: crates/chart-highlight/src/chart.rs
// Summary: Chart struct: data for one chart type plus the transformer or radial geometry used to hit-test it.

use crate::data::{BarData, BubbleData, CandleData, CombinedData, LineData, PieData, RadarData, ScatterData};
use crate::options::{Animator, HighlightOptions};
use crate::radial::{PieGeometry, RadarGeometry};
use crate::transform::AxisTransformers;

/// Every chart geometry the highlighter knows how to hit-test.
#[derive(Clone, Debug)]
pub enum ChartKind {
    Line { data: LineData, transformers: AxisTransformers },
    Scatter { data: ScatterData, transformers: AxisTransformers },
    Candle { data: CandleData, transformers: AxisTransformers },
    Bubble { data: BubbleData, transformers: AxisTransformers },
    Bar { data: BarData, transformers: AxisTransformers },
    /// Bars growing left to right; transformers come from [`AxisTransformers::horizontal`].
    HorizontalBar { data: BarData, transformers: AxisTransformers },
    Combined { data: CombinedData, transformers: AxisTransformers },
    Pie { data: PieData, geometry: PieGeometry },
    Radar { data: RadarData, geometry: RadarGeometry },
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub options: HighlightOptions,
    pub animator: Animator,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, options: HighlightOptions::default(), animator: Animator::default() }
    }

    pub fn line(data: LineData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Line { data, transformers })
    }

    pub fn scatter(data: ScatterData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Scatter { data, transformers })
    }

    pub fn candle(data: CandleData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Candle { data, transformers })
    }

    pub fn bubble(data: BubbleData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Bubble { data, transformers })
    }

    pub fn bar(data: BarData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Bar { data, transformers })
    }

    pub fn horizontal_bar(data: BarData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::HorizontalBar { data, transformers })
    }

    pub fn combined(data: CombinedData, transformers: AxisTransformers) -> Self {
        Self::new(ChartKind::Combined { data, transformers })
    }

    pub fn pie(data: PieData, geometry: PieGeometry) -> Self {
        Self::new(ChartKind::Pie { data, geometry })
    }

    pub fn radar(data: RadarData, geometry: RadarGeometry) -> Self {
        Self::new(ChartKind::Radar { data, geometry })
    }

    pub fn with_options(mut self, options: HighlightOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = animator;
        self
    }

    /// Number of data sets, counting every sub data of a combined chart.
    pub fn data_set_count(&self) -> usize {
        match &self.kind {
            ChartKind::Line { data, .. } | ChartKind::Scatter { data, .. } => data.data_set_count(),
            ChartKind::Candle { data, .. } => data.data_set_count(),
            ChartKind::Bubble { data, .. } => data.data_set_count(),
            ChartKind::Bar { data, .. } | ChartKind::HorizontalBar { data, .. } => data.data_set_count(),
            ChartKind::Combined { data, .. } => data.all_data().map(|d| d.data_set_count()).sum(),
            ChartKind::Pie { data, .. } => data.data_set_count(),
            ChartKind::Radar { data, .. } => data.data_set_count(),
        }
    }
}
