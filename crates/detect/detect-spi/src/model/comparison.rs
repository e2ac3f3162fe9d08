//! Comparison result row.

use crate::model::AlertStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One classified (date, metric) pair. Created once per comparison pass and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Time point, when the forecast batch carried a date column.
    pub date: Option<NaiveDate>,
    /// Metric key the pair was joined on.
    pub metric: String,
    /// Decomposed `(dimension name, value)` pairs, in configured order.
    /// Empty when no decomposer is configured.
    pub dimensions: Vec<(String, String)>,
    /// Observed value.
    pub actual: f64,
    /// Point forecast at the configured point index.
    pub forecast: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
    pub status: AlertStatus,
    /// Percentage deviation from the violated bound; 0 for in-range,
    /// no-forecast, and zero-bound rows.
    pub deviation_pct: f64,
    /// True when the violated bound was zero and the deviation could not be
    /// computed; the 0 in `deviation_pct` is then a placeholder, not a
    /// measurement.
    pub zero_bound: bool,
}

impl ComparisonResult {
    /// True for the two out-of-range statuses.
    pub fn is_anomaly(&self) -> bool {
        self.status.is_anomaly()
    }
}
