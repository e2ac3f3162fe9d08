//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Malformed quantile cell '{cell}': {reason}")]
    MalformedQuantile { cell: String, reason: String },

    #[error("Malformed actual cell '{cell}': not numeric")]
    MalformedActual { cell: String },

    #[error("Invalid quantile indices: lower {lower}, upper {upper}, point {point}; require lower < upper < vector length {len}")]
    InvalidQuantileIndex {
        lower: usize,
        upper: usize,
        point: usize,
        len: usize,
    },

    #[error("Metric key '{key}' has {got} segments, expected {expected} dimension(s)")]
    DimensionMismatch {
        key: String,
        expected: usize,
        got: usize,
    },

    #[error("{0} batch is empty")]
    EmptyBatch(String),

    #[error(transparent)]
    Frame(#[from] frame::FrameError),

    #[error(transparent)]
    Transform(#[from] transform_spi::TransformError),
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;
