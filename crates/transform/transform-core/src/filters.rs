//! Row filter implementations.

use frame::{Frame, Value};
use transform_api::{CumulativeMassConfig, FilterMode, ValueFilterConfig};
use transform_spi::{Result, TransformError, Transformer};

// ============================================================================
// Value Filter
// ============================================================================

/// Filters rows by membership in a value set and/or an inclusive numeric
/// range over one column.
///
/// A frame without the configured column passes through unchanged; filtering
/// on an absent column is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct ValueFilter {
    config: ValueFilterConfig,
}

impl ValueFilter {
    /// Builds the filter, rejecting configurations with no criterion at all.
    pub fn from_config(config: ValueFilterConfig) -> Result<Self> {
        if config.values.is_none() && config.min_value.is_none() && config.max_value.is_none() {
            return Err(TransformError::InvalidParameter {
                name: "values/min_value/max_value".to_string(),
                reason: "at least one filter criterion must be specified".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Membership filter over a value set.
    pub fn members<S: Into<String>>(column: S, values: Vec<Value>, mode: FilterMode) -> Self {
        Self {
            config: ValueFilterConfig::members(column, values, mode),
        }
    }

    /// Inclusive numeric range filter; either bound may be open.
    pub fn range<S: Into<String>>(column: S, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            config: ValueFilterConfig::range(column, min, max),
        }
    }

    fn row_passes(&self, cell: &Value) -> bool {
        if let Some(values) = &self.config.values {
            let member = values.contains(cell);
            let keep = match self.config.mode {
                FilterMode::Include => member,
                FilterMode::Exclude => !member,
            };
            if !keep {
                return false;
            }
        }
        if self.config.min_value.is_some() || self.config.max_value.is_some() {
            let Some(x) = cell.as_f64() else {
                return false;
            };
            if self.config.min_value.is_some_and(|min| x < min) {
                return false;
            }
            if self.config.max_value.is_some_and(|max| x > max) {
                return false;
            }
        }
        true
    }
}

impl Transformer for ValueFilter {
    fn name(&self) -> &str {
        "value_filter"
    }

    fn apply(&self, frame: Frame) -> Result<Frame> {
        let Some(column) = frame.get(&self.config.column) else {
            return Ok(frame);
        };
        if frame.is_empty() {
            return Ok(frame);
        }
        let keep: Vec<bool> = column.iter().map(|cell| self.row_passes(cell)).collect();
        Ok(frame.retain_rows(&keep))
    }
}

// ============================================================================
// Cumulative Mass Filter
// ============================================================================

/// Retains the minimal leading subset of rows carrying the top share of a
/// numeric column's total mass.
///
/// Rows are stably sorted descending by the column, then kept up to and
/// including the first row whose cumulative share of the grand total reaches
/// the threshold. The output is that sorted prefix, so for any threshold the
/// retained rows are a prefix of the descending-sorted input. A non-positive
/// grand total makes the filter a no-op.
#[derive(Debug, Clone)]
pub struct CumulativeMassFilter {
    config: CumulativeMassConfig,
}

impl CumulativeMassFilter {
    pub fn new<S: Into<String>>(value_column: S, threshold: f64) -> Self {
        Self {
            config: CumulativeMassConfig::new(value_column, threshold),
        }
    }

    pub fn from_config(config: CumulativeMassConfig) -> Self {
        Self { config }
    }
}

impl Transformer for CumulativeMassFilter {
    fn name(&self) -> &str {
        "cumulative_mass_filter"
    }

    fn apply(&self, frame: Frame) -> Result<Frame> {
        let Some(column) = frame.get(&self.config.value_column) else {
            return Ok(frame);
        };
        if frame.is_empty() {
            return Ok(frame);
        }
        if self.config.threshold <= 0.0 {
            return Ok(frame.select_rows(&[]));
        }

        let masses: Vec<f64> = column
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0))
            .collect();
        let total: f64 = masses.iter().sum();
        if total <= 0.0 {
            return Ok(frame);
        }

        // Stable sort keeps ties in original relative order.
        let mut order: Vec<usize> = (0..masses.len()).collect();
        order.sort_by(|&a, &b| masses[b].partial_cmp(&masses[a]).unwrap_or(std::cmp::Ordering::Equal));

        let mut kept = Vec::with_capacity(order.len());
        let mut cumulative = 0.0;
        for &row in &order {
            cumulative += masses[row];
            kept.push(row);
            if self.config.threshold < 1.0 && cumulative / total >= self.config.threshold {
                break;
            }
        }
        Ok(frame.select_rows(&kept))
    }
}
