//! Model types for anomaly detection.

mod comparison;
mod quantile;
mod status;

pub use comparison::ComparisonResult;
pub use quantile::{QuantileBounds, QuantileVector, QUANTILE_COUNT, QUANTILE_DELIMITER};
pub use status::AlertStatus;
