// File: crates/chart-highlight/src/error.rs
// Summary: Construction-time validation errors for chart data and transformers.

use thiserror::Error;

/// Errors raised while building chart data or coordinate transformers.
///
/// Highlighting itself never fails: a touch that designates nothing yields `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("entry {index} has a non-finite x value ({x})")]
    NonFiniteX { index: usize, x: f64 },

    #[error("invalid candle at x={x}: {reason}")]
    InvalidCandle { x: f64, reason: &'static str },

    #[error("content rect {width}x{height} has no drawable area")]
    EmptyContent { width: f64, height: f64 },

    #[error("axis '{label}' has non-finite bounds [{min}, {max}]")]
    NonFiniteAxis { label: String, min: f64, max: f64 },
}
