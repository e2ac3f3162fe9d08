//! Frame error types.

use thiserror::Error;

/// Errors raised by frame operations.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("column '{0}' not found in frame")]
    MissingColumn(String),

    #[error("column '{name}' has {got} rows, frame has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("column '{0}' already exists in frame")]
    DuplicateColumn(String),
}

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, FrameError>;
