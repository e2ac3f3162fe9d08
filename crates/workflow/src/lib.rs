//! Workflow
//!
//! Orchestration for the two recurring runs: forecast generation and
//! forecast-actual anomaly detection. Collaborators (readers, writers,
//! forecasters, detectors) plug in behind traits; the shipped reader and
//! writer are in-memory.

mod contract;
mod detection;
mod error;
mod forecast;
mod memory;

pub use contract::{Forecaster, FrameReader, FrameWriter};
pub use detection::AnomalyDetectionWorkflow;
pub use error::{Result, WorkflowError};
pub use forecast::ForecastWorkflow;
pub use memory::{MemoryReader, MemoryWriter};
