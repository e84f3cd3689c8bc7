// File: crates/chart-highlight/src/range.rs
// Summary: Cumulative band of one value inside a stacked bar entry.

/// One stack segment as the half-open interval `(from, to]`.
///
/// Stack values `-10, 5, 20` produce the bands `(-10, 0]`, `(0, 5]` and `(5, 25]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub from: f64,
    pub to: f64,
}

impl Range {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// `from < value <= to`: a value on a lower boundary belongs to the band below.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value > self.from && value <= self.to
    }

    #[inline]
    pub fn is_larger(&self, value: f64) -> bool {
        value > self.to
    }

    #[inline]
    pub fn is_smaller(&self, value: f64) -> bool {
        value < self.from
    }
}
