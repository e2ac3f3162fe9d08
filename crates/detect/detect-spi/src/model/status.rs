//! Classification status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one (date, metric) pair against its forecast interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    /// Actual within the inclusive [lower, upper] interval.
    InRange,
    /// Actual strictly below the lower bound.
    BelowLower,
    /// Actual strictly above the upper bound.
    AboveUpper,
    /// No forecast was produced for the pair.
    NoForecast,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::InRange => "IN_RANGE",
            AlertStatus::BelowLower => "BELOW_LOWER",
            AlertStatus::AboveUpper => "ABOVE_UPPER",
            AlertStatus::NoForecast => "NO_FORECAST",
        }
    }

    /// True for the two out-of-range statuses.
    pub fn is_anomaly(&self) -> bool {
        matches!(self, AlertStatus::BelowLower | AlertStatus::AboveUpper)
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
