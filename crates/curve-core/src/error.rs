// File: crates/curve-core/src/error.rs
// Summary: Typed failures of the geometry pipeline.

use thiserror::Error;

use crate::axis::AxisKind;

pub type CurveResult<T> = Result<T, CurveError>;

/// Local, synchronous pipeline failures. Inputs are deterministic, so a
/// caller retrying with the same dataset and viewport gets the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("all {axis} values are equal; scaling coefficient is undefined")]
    DegenerateRange { axis: AxisKind },

    #[error("{axis} values span more than a finite range")]
    RangeOverflow { axis: AxisKind },

    #[error("path needs at least 2 points, found {found}")]
    InsufficientPointsForSpline { found: usize },

    #[error("data point {index} has a non-finite coordinate")]
    NonFiniteValue { index: usize },

    #[error("viewport {width}x{height} leaves no room for the plot area")]
    ViewportTooSmall { width: f64, height: f64 },
}
