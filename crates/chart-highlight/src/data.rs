// File: crates/chart-highlight/src/data.rs
// Summary: Chart data containers (one per chart type) and the combined container used by overlaid charts.

use crate::dataset::DataSet;
use crate::entry::{BarEntry, BubbleEntry, CandleEntry, ChartEntry, Entry, PieEntry, RadarEntry};
use crate::highlight::Highlight;

/// The data sets of one chart, in drawing order.
#[derive(Clone, Debug)]
pub struct ChartData<E> {
    data_sets: Vec<DataSet<E>>,
}

pub type LineData = ChartData<Entry>;
pub type ScatterData = ChartData<Entry>;
pub type BarData = ChartData<BarEntry>;
pub type CandleData = ChartData<CandleEntry>;
pub type BubbleData = ChartData<BubbleEntry>;
pub type PieData = ChartData<PieEntry>;
pub type RadarData = ChartData<RadarEntry>;

impl<E> Default for ChartData<E> {
    fn default() -> Self {
        Self { data_sets: Vec::new() }
    }
}

impl<E: ChartEntry> ChartData<E> {
    pub fn new(data_sets: Vec<DataSet<E>>) -> Self {
        Self { data_sets }
    }

    pub fn add_data_set(&mut self, set: DataSet<E>) {
        self.data_sets.push(set);
    }

    pub fn data_sets(&self) -> &[DataSet<E>] { &self.data_sets }
    pub fn data_set_count(&self) -> usize { self.data_sets.len() }

    pub fn data_set(&self, index: usize) -> Option<&DataSet<E>> {
        self.data_sets.get(index)
    }

    pub fn data_set_mut(&mut self, index: usize) -> Option<&mut DataSet<E>> {
        self.data_sets.get_mut(index)
    }

    /// Data set holding the most entries (first one on ties).
    pub fn max_entry_count_set(&self) -> Option<&DataSet<E>> {
        self.data_sets.iter().reduce(|best, s| if s.entry_count() > best.entry_count() { s } else { best })
    }

    /// Entry count of [`Self::max_entry_count_set`], 0 when empty.
    pub fn max_entry_count(&self) -> usize {
        self.max_entry_count_set().map_or(0, DataSet::entry_count)
    }

    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(DataSet::entry_count).sum()
    }

    pub fn y_min(&self) -> Option<f64> {
        self.data_sets.iter().filter_map(DataSet::y_min).reduce(f64::min)
    }

    pub fn y_max(&self) -> Option<f64> {
        self.data_sets.iter().filter_map(DataSet::y_max).reduce(f64::max)
    }

    /// Entry designated by an x-addressed highlight: the first entry at
    /// `h.x` whose y equals `h.y`, or any entry there when `h.y` is NaN.
    pub fn entry_for_highlight(&self, h: &Highlight) -> Option<&E> {
        self.data_set(h.data_set_index)?
            .entries_for_x_value(h.x)
            .iter()
            .find(|e| h.y.is_nan() || e.y() == h.y)
    }

    /// Entry designated by an index-addressed highlight (pie slices, radar spokes).
    pub fn indexed_entry_for_highlight(&self, h: &Highlight) -> Option<&E> {
        if !(h.x >= 0.0) {
            return None;
        }
        self.data_set(h.data_set_index)?.entry_for_index(h.x as usize)
    }
}

/// Several chart data objects sharing one coordinate space.
#[derive(Clone, Debug, Default)]
pub struct CombinedData {
    pub line: Option<LineData>,
    pub bar: Option<BarData>,
    pub scatter: Option<ScatterData>,
    pub candle: Option<CandleData>,
    pub bubble: Option<BubbleData>,
}

/// Borrowed view of one data object inside [`CombinedData`].
#[derive(Clone, Copy, Debug)]
pub enum SubData<'a> {
    Line(&'a LineData),
    Bar(&'a BarData),
    Scatter(&'a ScatterData),
    Candle(&'a CandleData),
    Bubble(&'a BubbleData),
}

impl<'a> SubData<'a> {
    pub fn data_set_count(&self) -> usize {
        match self {
            SubData::Line(d) | SubData::Scatter(d) => d.data_set_count(),
            SubData::Bar(d) => d.data_set_count(),
            SubData::Candle(d) => d.data_set_count(),
            SubData::Bubble(d) => d.data_set_count(),
        }
    }

    pub fn entry_for_highlight(&self, h: &Highlight) -> Option<&'a dyn ChartEntry> {
        match *self {
            SubData::Line(d) | SubData::Scatter(d) => d.entry_for_highlight(h).map(|e| e as &dyn ChartEntry),
            SubData::Bar(d) => d.entry_for_highlight(h).map(|e| e as &dyn ChartEntry),
            SubData::Candle(d) => d.entry_for_highlight(h).map(|e| e as &dyn ChartEntry),
            SubData::Bubble(d) => d.entry_for_highlight(h).map(|e| e as &dyn ChartEntry),
        }
    }
}

impl CombinedData {
    /// Present data objects in container order: line, bar, scatter, candle, bubble.
    pub fn all_data(&self) -> impl Iterator<Item = SubData<'_>> {
        [
            self.line.as_ref().map(SubData::Line),
            self.bar.as_ref().map(SubData::Bar),
            self.scatter.as_ref().map(SubData::Scatter),
            self.candle.as_ref().map(SubData::Candle),
            self.bubble.as_ref().map(SubData::Bubble),
        ]
        .into_iter()
        .flatten()
    }

    pub fn data_by_index(&self, index: usize) -> Option<SubData<'_>> {
        self.all_data().nth(index)
    }

    /// Position of the bar data in container order, if present.
    pub fn bar_data_index(&self) -> Option<usize> {
        self.all_data().position(|d| matches!(d, SubData::Bar(_)))
    }

    pub fn data_set_count_at(&self, index: usize) -> usize {
        self.data_by_index(index).map_or(0, |d| d.data_set_count())
    }

    pub fn entry_for_highlight(&self, h: &Highlight) -> Option<&dyn ChartEntry> {
        self.data_by_index(h.data_index?)?.entry_for_highlight(h)
    }
}
