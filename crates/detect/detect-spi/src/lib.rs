//! Anomaly Detection Service Provider Interface
//!
//! Defines the contract, models, and errors for forecast-actual comparison.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AnomalyDetector;
pub use error::{DetectError, Result};
pub use model::{
    AlertStatus, ComparisonResult, QuantileBounds, QuantileVector, QUANTILE_COUNT,
    QUANTILE_DELIMITER,
};
