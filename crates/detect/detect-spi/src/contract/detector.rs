//! Anomaly detector trait definition.

use crate::error::Result;
use frame::Frame;

/// Anomaly detector trait.
///
/// Implementations pair a forecast batch with an actual batch and classify
/// each (date, metric) pair. Detection is a pure function of its inputs and
/// configuration; both frames are consumed by value.
pub trait AnomalyDetector: Send + Sync {
    /// Detector name, for diagnostics.
    fn name(&self) -> &str;

    /// Compare forecast and actual batches, returning one result row per
    /// classified pair.
    fn detect(&self, forecast: Frame, actual: Frame) -> Result<Frame>;
}
