//! Workflow error types.

use thiserror::Error;

/// Workflow orchestration errors.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{0} batch is empty")]
    EmptyBatch(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Source '{name}' failed: {reason}")]
    Source { name: String, reason: String },

    #[error("Sink '{name}' failed: {reason}")]
    Sink { name: String, reason: String },

    #[error(transparent)]
    Detect(#[from] detect_spi::DetectError),

    #[error(transparent)]
    Transform(#[from] transform_spi::TransformError),

    #[error(transparent)]
    Frame(#[from] frame::FrameError),
}

/// Result type for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
