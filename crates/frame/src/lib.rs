//! # frame
//!
//! Columnar tabular batch model shared by the transform pipeline and the
//! comparison engine. A [`Frame`] is an ordered set of named, equal-length
//! columns of [`Value`] cells, passed by value between stages.

mod error;
mod pivot;
mod table;
mod value;

pub use error::{FrameError, Result};
pub use pivot::{Pivot, KEY_SEPARATOR};
pub use table::Frame;
pub use value::Value;
