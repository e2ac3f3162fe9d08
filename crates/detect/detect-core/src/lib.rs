//! Detect Core
//!
//! The forecast-actual [`ComparisonEngine`] and the [`MetricDecomposer`] that
//! splits joined metric keys back into named dimensions.

mod decompose;
mod engine;

pub use decompose::MetricDecomposer;
pub use engine::ComparisonEngine;
