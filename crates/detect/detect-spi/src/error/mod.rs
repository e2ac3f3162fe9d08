//! Error types for anomaly detection.

mod detect_error;

pub use detect_error::{DetectError, Result};
