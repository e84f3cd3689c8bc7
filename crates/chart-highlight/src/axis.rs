// File: crates/chart-highlight/src/axis.rs
// Summary: Axis model with ranges, scale kind, and the left/right y-axis binding of data sets.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Which y-axis a data set is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a
    }

    /// Span between the axis bounds.
    pub fn range(&self) -> f64 {
        (self.max - self.min).abs()
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}
