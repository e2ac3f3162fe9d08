//! Detect Facade
//!
//! Unified re-exports for the anomaly detection module:
//! - `AnomalyDetector` trait, models, and errors from SPI
//! - `EngineConfig` from API
//! - `ComparisonEngine` and `MetricDecomposer` from Core

// Re-export everything from SPI
pub use detect_spi::*;

// Re-export everything from API
pub use detect_api::*;

// Re-export everything from Core
pub use detect_core::*;
