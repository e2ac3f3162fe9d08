//! Collaborator seams the workflows orchestrate.

use crate::error::Result;
use frame::Frame;

/// Loads one batch from wherever it lives.
///
/// The shipped implementation is in-memory; storage-backed readers plug in
/// behind this trait.
pub trait FrameReader: Send + Sync {
    /// Reader name, for diagnostics.
    fn name(&self) -> &str;

    /// Loads the batch. An empty batch is not an error here; the workflows
    /// decide whether their contract tolerates it.
    fn load(&self) -> Result<Frame>;
}

/// Persists one batch.
pub trait FrameWriter: Send + Sync {
    /// Writer name, for diagnostics.
    fn name(&self) -> &str;

    fn write(&self, frame: Frame) -> Result<()>;
}

// Shared handles work anywhere the traits are expected, so a caller can keep
// a handle to a writer it hands to a workflow and inspect it afterwards.
impl<T: FrameReader + ?Sized> FrameReader for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Frame> {
        (**self).load()
    }
}

impl<T: FrameWriter + ?Sized> FrameWriter for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write(&self, frame: Frame) -> Result<()> {
        (**self).write(frame)
    }
}

/// Produces forecast batches from history.
///
/// The output frame carries one pipe-delimited quantile cell per (date,
/// metric) pair, the wire form the comparison engine consumes.
pub trait Forecaster: Send + Sync {
    /// Forecaster name, for diagnostics.
    fn name(&self) -> &str;

    /// Forecasts `horizon` time points past the end of `history`.
    fn forecast(&self, history: Frame, horizon: usize) -> Result<Frame>;
}
