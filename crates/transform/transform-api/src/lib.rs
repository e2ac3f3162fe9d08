//! Transform API
//!
//! Configuration types for the transformer implementations in
//! `transform-core`.

use frame::Value;
use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use transform_spi::{Hook, Result, TransformError, Transformer};

// ============================================================================
// Filter Configuration
// ============================================================================

/// Membership filter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Keep rows whose value is in the set.
    Include,
    /// Remove rows whose value is in the set.
    Exclude,
}

/// Value filter configuration: membership set and/or inclusive numeric range
/// over one column. At least one criterion must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueFilterConfig {
    /// Column to filter on.
    pub column: String,
    /// Membership set, if any.
    pub values: Option<Vec<Value>>,
    /// How the membership set is applied (default: include).
    pub mode: FilterMode,
    /// Inclusive lower bound, `None` for unbounded.
    pub min_value: Option<f64>,
    /// Inclusive upper bound, `None` for unbounded.
    pub max_value: Option<f64>,
}

impl ValueFilterConfig {
    /// Membership filter over a value set.
    pub fn members<S: Into<String>>(column: S, values: Vec<Value>, mode: FilterMode) -> Self {
        Self {
            column: column.into(),
            values: Some(values),
            mode,
            min_value: None,
            max_value: None,
        }
    }

    /// Inclusive numeric range filter; either bound may be open.
    pub fn range<S: Into<String>>(
        column: S,
        min_value: Option<f64>,
        max_value: Option<f64>,
    ) -> Self {
        Self {
            column: column.into(),
            values: None,
            mode: FilterMode::Include,
            min_value,
            max_value,
        }
    }
}

/// Cumulative-mass filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativeMassConfig {
    /// Numeric column whose mass is ranked.
    pub value_column: String,
    /// Cumulative share of the grand total to retain, in (0, 1].
    pub threshold: f64,
}

impl CumulativeMassConfig {
    pub fn new<S: Into<String>>(value_column: S, threshold: f64) -> Self {
        Self {
            value_column: value_column.into(),
            threshold,
        }
    }
}

impl Default for CumulativeMassConfig {
    fn default() -> Self {
        Self {
            value_column: "forecast".to_string(),
            threshold: 0.95,
        }
    }
}

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Closed set of pure value-level formats applied by `ColumnFormatter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Render a number as a percentage string, e.g. `15.3` -> `"15.3%"`.
    Percentage {
        decimal_places: usize,
        /// Multiply by 100 first, for ratio-valued columns.
        multiply_by_100: bool,
    },
    /// Round a number to a fixed number of decimal places.
    Round { decimal_places: usize },
}

impl ValueFormat {
    /// Percentage format with the conventional one decimal place.
    pub fn percentage() -> Self {
        ValueFormat::Percentage {
            decimal_places: 1,
            multiply_by_100: false,
        }
    }
}

/// Column formatter configuration: one format applied to each named column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnFormatConfig {
    pub columns: Vec<String>,
    pub format: ValueFormat,
}

impl ColumnFormatConfig {
    pub fn new<S: Into<String>>(columns: Vec<S>, format: ValueFormat) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            format,
        }
    }
}

// ============================================================================
// Selector Configuration
// ============================================================================

/// Column selection behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Keep only the named columns.
    Keep,
    /// Drop the named columns.
    Drop,
}

/// Column selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSelectConfig {
    pub columns: Vec<String>,
    pub mode: SelectMode,
}

impl ColumnSelectConfig {
    pub fn new<S: Into<String>>(columns: Vec<S>, mode: SelectMode) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_mass_default() {
        let config = CumulativeMassConfig::default();
        assert_eq!(config.value_column, "forecast");
        assert_eq!(config.threshold, 0.95);
    }

    #[test]
    fn test_value_filter_constructors() {
        let members = ValueFilterConfig::members(
            "status",
            vec![Value::from("BELOW_LOWER"), Value::from("ABOVE_UPPER")],
            FilterMode::Include,
        );
        assert!(members.values.is_some());
        assert!(members.min_value.is_none());

        let range = ValueFilterConfig::range("deviation_pct", Some(5.0), None);
        assert!(range.values.is_none());
        assert_eq!(range.min_value, Some(5.0));
    }

    #[test]
    fn test_value_format_serde() {
        let format = ValueFormat::Percentage {
            decimal_places: 2,
            multiply_by_100: true,
        };
        let json = serde_json::to_string(&format).unwrap();
        let back: ValueFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(format, back);
    }
}
