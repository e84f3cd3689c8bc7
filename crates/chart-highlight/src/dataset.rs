// File: crates/chart-highlight/src/dataset.rs
// Summary: Data set model: x-sorted entries with nearest-x lookup, axis binding, and highlight flag.

use crate::axis::AxisDependency;
use crate::entry::ChartEntry;
use crate::error::ChartError;

/// How to pick an entry when no entry sits exactly at the requested x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
    Closest,
}

/// Ordered collection of entries sharing a y-axis binding.
/// Contract: entries are sorted by x (stable for equal x).
#[derive(Clone, Debug)]
pub struct DataSet<E> {
    label: String,
    entries: Vec<E>,
    axis: AxisDependency,
    highlight_enabled: bool,
    stack_size: usize,
}

impl<E: ChartEntry> DataSet<E> {
    /// Build a data set, sorting `entries` by x. Rejects non-finite x values.
    pub fn new(label: impl Into<String>, mut entries: Vec<E>) -> Result<Self, ChartError> {
        if let Some((index, e)) = entries.iter().enumerate().find(|(_, e)| !e.x().is_finite()) {
            return Err(ChartError::NonFiniteX { index, x: e.x() });
        }
        entries.sort_by(|a, b| a.x().total_cmp(&b.x()));
        let stack_size = entries.iter().map(stack_len).max().unwrap_or(1);
        Ok(Self { label: label.into(), entries, axis: AxisDependency::Left, highlight_enabled: true, stack_size })
    }

    pub fn with_axis(mut self, axis: AxisDependency) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    /// Insert `entry` after any entries sharing its x.
    pub fn push(&mut self, entry: E) -> Result<(), ChartError> {
        let x = entry.x();
        if !x.is_finite() {
            return Err(ChartError::NonFiniteX { index: self.entries.len(), x });
        }
        self.stack_size = self.stack_size.max(stack_len(&entry));
        let at = self.entries.partition_point(|e| e.x() <= x);
        self.entries.insert(at, entry);
        Ok(())
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn axis_dependency(&self) -> AxisDependency { self.axis }
    pub fn is_highlight_enabled(&self) -> bool { self.highlight_enabled }
    pub fn set_highlight_enabled(&mut self, enabled: bool) { self.highlight_enabled = enabled; }
    pub fn entries(&self) -> &[E] { &self.entries }
    pub fn entry_count(&self) -> usize { self.entries.len() }

    pub fn entry_for_index(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    /// Largest number of stack values in any entry (1 when nothing is stacked).
    pub fn stack_size(&self) -> usize { self.stack_size }

    pub fn is_stacked(&self) -> bool { self.stack_size > 1 }

    /// All entries whose x equals `x` exactly, in data set order.
    pub fn entries_for_x_value(&self, x: f64) -> &[E] {
        let lo = self.entries.partition_point(|e| e.x() < x);
        let hi = self.entries.partition_point(|e| e.x() <= x);
        &self.entries[lo..hi.max(lo)]
    }

    /// Index of the entry closest to `x` under `rounding`.
    ///
    /// Equidistant candidates resolve to the lower index. With `closest_to_y`,
    /// the entry whose y is nearest the hint is chosen among those sharing
    /// the found x (first one on ties).
    pub fn entry_index(&self, x: f64, closest_to_y: Option<f64>, rounding: Rounding) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let mut low = 0;
        let mut high = self.entries.len() - 1;
        while low < high {
            let m = low + (high - low) / 2;
            let d1 = self.entries[m].x() - x;
            let d2 = self.entries[m + 1].x() - x;
            let (ad1, ad2) = (d1.abs(), d2.abs());
            if ad2 < ad1 {
                low = m + 1;
            } else if ad1 < ad2 {
                high = m;
            } else if d1 < 0.0 && d2 < 0.0 {
                // equal x below the target; keep walking up
                low = m + 1;
            } else {
                high = m;
            }
        }
        let mut closest = high;

        let found_x = self.entries[closest].x();
        match rounding {
            Rounding::Up if found_x < x && closest + 1 < self.entries.len() => closest += 1,
            Rounding::Down if found_x > x && closest > 0 => closest -= 1,
            _ => {}
        }

        if let Some(hint) = closest_to_y.filter(|y| !y.is_nan()) {
            let found_x = self.entries[closest].x();
            let start = self.entries.partition_point(|e| e.x() < found_x);
            let mut best = start;
            let mut best_dist = (self.entries[start].y() - hint).abs();
            for (i, e) in self.entries.iter().enumerate().skip(start + 1) {
                if e.x() != found_x {
                    break;
                }
                let d = (e.y() - hint).abs();
                if d < best_dist {
                    best = i;
                    best_dist = d;
                }
            }
            closest = best;
        }
        Some(closest)
    }

    pub fn entry_for_x_value(&self, x: f64, closest_to_y: Option<f64>, rounding: Rounding) -> Option<&E> {
        self.entry_index(x, closest_to_y, rounding).map(|i| &self.entries[i])
    }

    pub fn x_min(&self) -> Option<f64> { self.entries.first().map(|e| e.x()) }
    pub fn x_max(&self) -> Option<f64> { self.entries.last().map(|e| e.x()) }

    pub fn y_min(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.y()).reduce(f64::min)
    }

    pub fn y_max(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.y()).reduce(f64::max)
    }
}

fn stack_len<E: ChartEntry>(e: &E) -> usize {
    e.y_vals().map_or(1, |v| v.len().max(1))
}
