use thiserror::Error;

/// Errors reported by the iterative estimators.
///
/// Every fallible operation is atomic: when a call returns an error, the
/// accumulator state is exactly what it was before the call.
#[derive(Debug, Error, PartialEq)]
pub enum StatError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("shape mismatch: {reason}")]
    ShapeMismatch { reason: String },

    #[error("insufficient data: need at least {required} observations, have {actual}")]
    InsufficientData { required: u64, actual: u64 },

    #[error("degenerate data: {0}")]
    DegenerateData(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
