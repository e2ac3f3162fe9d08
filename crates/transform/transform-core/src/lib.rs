//! Transform Core
//!
//! Transformer implementations (filters, formatters, selector, pivot) and
//! the hook-keyed [`TransformPipeline`].

mod filters;
mod formatters;
mod pipeline;

pub use filters::{CumulativeMassFilter, ValueFilter};
pub use formatters::{ColumnFormatter, ColumnSelector, PivotTransformer};
pub use pipeline::{TransformPipeline, TransformPipelineBuilder};
