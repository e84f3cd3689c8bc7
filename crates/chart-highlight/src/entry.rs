// File: crates/chart-highlight/src/entry.rs
// Summary: Entry model for line/scatter, bar (plain and stacked), candle, bubble, pie, and radar data.

use crate::error::ChartError;
use crate::range::Range;

/// What the highlighter needs to know about a data point.
pub trait ChartEntry {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    /// Stack values of a stacked bar entry, `None` for everything else.
    fn y_vals(&self) -> Option<&[f64]> { None }
    /// Cumulative bands of the stack values, empty when not stacked.
    fn ranges(&self) -> &[Range] { &[] }
}

/// Plain (x, y) point used by line and scatter data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

impl Entry {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ChartEntry for Entry {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

/// Bar entry; stacked when built from several values.
#[derive(Clone, Debug, PartialEq)]
pub struct BarEntry {
    pub x: f64,
    y: f64,
    y_vals: Option<Vec<f64>>,
    ranges: Vec<Range>,
    negative_sum: f64,
    positive_sum: f64,
}

impl BarEntry {
    /// Single-value bar.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, y_vals: None, ranges: Vec::new(), negative_sum: 0.0, positive_sum: 0.0 }
    }

    /// Stacked bar; `y` becomes the sum of `vals`.
    pub fn stacked(x: f64, vals: Vec<f64>) -> Self {
        let mut e = Self::new(x, 0.0);
        e.set_vals(Some(vals));
        e
    }

    /// Replace the stack values, recomputing the sum, the signed sums and the ranges.
    pub fn set_vals(&mut self, vals: Option<Vec<f64>>) {
        self.y = vals.as_deref().map_or(0.0, |v| v.iter().sum());
        self.y_vals = vals;
        self.calc_pos_neg_sum();
        self.calc_ranges();
    }

    pub fn is_stacked(&self) -> bool {
        self.y_vals.is_some()
    }

    /// Sum of all negative stack values, as a positive number.
    pub fn negative_sum(&self) -> f64 { self.negative_sum }

    /// Sum of all positive stack values.
    pub fn positive_sum(&self) -> f64 { self.positive_sum }

    /// Sum of the stack values above `stack_index`.
    pub fn sum_below(&self, stack_index: usize) -> f64 {
        match &self.y_vals {
            Some(vals) => vals.iter().skip(stack_index + 1).sum(),
            None => 0.0,
        }
    }

    fn calc_pos_neg_sum(&mut self) {
        let (mut neg, mut pos) = (0.0, 0.0);
        for &v in self.y_vals.iter().flatten() {
            if v <= 0.0 { neg += v.abs() } else { pos += v }
        }
        self.negative_sum = neg;
        self.positive_sum = pos;
    }

    fn calc_ranges(&mut self) {
        self.ranges.clear();
        let Some(vals) = &self.y_vals else { return };
        // negatives grow downward from the bottom of the stack, positives upward from zero
        let mut neg_remain = -self.negative_sum;
        let mut pos_remain = 0.0;
        for &v in vals {
            if v < 0.0 {
                self.ranges.push(Range::new(neg_remain, neg_remain - v));
                neg_remain -= v;
            } else {
                self.ranges.push(Range::new(pos_remain, pos_remain + v));
                pos_remain += v;
            }
        }
    }
}

impl ChartEntry for BarEntry {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
    fn y_vals(&self) -> Option<&[f64]> { self.y_vals.as_deref() }
    fn ranges(&self) -> &[Range] { &self.ranges }
}

/// OHLC entry; its y is the middle of the shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleEntry {
    pub x: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

impl CandleEntry {
    /// Construct a candle enforcing OHLC invariants:
    /// low <= min(open,close) and high >= max(open,close), and low <= high.
    pub fn try_new(x: f64, high: f64, low: f64, open: f64, close: f64) -> Result<Self, ChartError> {
        let lo = open.min(close);
        let hi = open.max(close);
        let reason = if low > lo {
            Some("low above min(open,close)")
        } else if high < hi {
            Some("high below max(open,close)")
        } else if low > high {
            Some("low above high")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ChartError::InvalidCandle { x, reason }),
            None => Ok(Self { x, high, low, open, close }),
        }
    }

    /// Difference between open and close.
    pub fn body_range(&self) -> f64 {
        (self.open - self.close).abs()
    }
}

impl ChartEntry for CandleEntry {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { (self.high + self.low) / 2.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleEntry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl BubbleEntry {
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

impl ChartEntry for BubbleEntry {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

/// Pie slice; slices are addressed by index, so x is always 0.
#[derive(Clone, Debug, PartialEq)]
pub struct PieEntry {
    pub value: f64,
    pub label: Option<String>,
}

impl PieEntry {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: Some(label.into()) }
    }
}

impl ChartEntry for PieEntry {
    fn x(&self) -> f64 { 0.0 }
    fn y(&self) -> f64 { self.value }
}

/// Radar spoke value; spokes are addressed by index, so x is always 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarEntry {
    pub value: f64,
}

impl RadarEntry {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }
}

impl ChartEntry for RadarEntry {
    fn x(&self) -> f64 { 0.0 }
    fn y(&self) -> f64 { self.value }
}
