//! Transformer error types.

use thiserror::Error;

/// Errors raised by transformers and pipelines.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Frame(#[from] frame::FrameError),

    #[error("Transformer '{name}' failed: {reason}")]
    TransformFailed { name: String, reason: String },
}

/// Result type for transformer operations.
pub type Result<T> = std::result::Result<T, TransformError>;
