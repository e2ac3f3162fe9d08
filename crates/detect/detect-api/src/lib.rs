//! Detect API
//!
//! Configuration types for the comparison engine.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use detect_spi::{
    AlertStatus, AnomalyDetector, ComparisonResult, DetectError, QuantileBounds,
    QuantileVector, Result, QUANTILE_COUNT, QUANTILE_DELIMITER,
};

/// Comparison engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Name of the time-point column shared by both batches (default: "date").
    pub date_column: String,
    /// Quantile index positions for lower bound, upper bound, and point
    /// forecast (default: 1/9/5, an 80% interval with the median point).
    pub bounds: QuantileBounds,
    /// Dimension names to decompose each metric key into. `None` leaves
    /// metric keys intact.
    pub dimension_names: Option<Vec<String>>,
    /// Separator the metric keys were joined with (default: '_').
    pub separator: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            bounds: QuantileBounds::default(),
            dimension_names: None,
            separator: '_',
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_column<S: Into<String>>(mut self, date_column: S) -> Self {
        self.date_column = date_column.into();
        self
    }

    pub fn with_bounds(mut self, bounds: QuantileBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_dimension_names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.dimension_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.date_column, "date");
        assert_eq!(config.bounds, QuantileBounds::default());
        assert!(config.dimension_names.is_none());
        assert_eq!(config.separator, '_');
    }

    #[test]
    fn test_builder_chain() {
        let config = EngineConfig::new()
            .with_date_column("day")
            .with_dimension_names(vec!["platform", "channel"])
            .with_separator('-');
        assert_eq!(config.date_column, "day");
        assert_eq!(
            config.dimension_names.as_deref(),
            Some(&["platform".to_string(), "channel".to_string()][..])
        );
        assert_eq!(config.separator, '-');
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = EngineConfig::default().with_dimension_names(vec!["platform"]);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimension_names, config.dimension_names);
    }
}
