//! Transform Facade
//!
//! Unified re-exports for the transform module:
//! - `Transformer` trait and `Hook` from SPI
//! - Configuration types from API
//! - Filters, formatters, selector, pivot adapter, and `TransformPipeline`
//!   from Core

// Re-export everything from SPI
pub use transform_spi::*;

// Re-export everything from API
pub use transform_api::*;

// Re-export everything from Core
pub use transform_core::*;
