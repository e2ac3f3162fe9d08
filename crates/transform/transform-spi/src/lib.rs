//! Transform Service Provider Interface
//!
//! Defines the batch transformer contract and the hook points at which
//! transformer chains run around a host operation.

mod error;

pub use error::{Result, TransformError};

use frame::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named point in a host operation's lifecycle at which a transformer chain
/// is applied. An enum rather than a free-form string so a hook typo is a
/// compile error, not a silently empty chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    /// Before the host operation consumes its input.
    Before,
    /// After the host operation produces its output.
    After,
    /// After anomaly detection, before the result leaves the detector.
    AfterDetection,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Before => write!(f, "before"),
            Hook::After => write!(f, "after"),
            Hook::AfterDetection => write!(f, "after_detection"),
        }
    }
}

/// Common trait for batch transformers.
///
/// Implementations are pure: they consume one frame and produce another,
/// never raise on an empty input, and preserve row identity and order unless
/// reordering or filtering is the transformer's documented purpose.
pub trait Transformer: Send + Sync {
    /// Name of this transformer, for diagnostics.
    fn name(&self) -> &str;

    /// Transform a frame into a new frame.
    fn apply(&self, frame: Frame) -> Result<Frame>;
}
