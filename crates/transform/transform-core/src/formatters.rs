//! Formatter and selector implementations.

use frame::{Frame, Pivot, Value};
use transform_api::{ColumnFormatConfig, ColumnSelectConfig, SelectMode, ValueFormat};
use transform_spi::{Result, Transformer};

// ============================================================================
// Column Formatter
// ============================================================================

/// Applies a pure value-level format to every cell of the named columns.
///
/// Columns not named are never touched; named columns absent from the frame
/// are skipped. Cells without a numeric view pass through unchanged.
#[derive(Debug, Clone)]
pub struct ColumnFormatter {
    config: ColumnFormatConfig,
}

impl ColumnFormatter {
    pub fn from_config(config: ColumnFormatConfig) -> Self {
        Self { config }
    }

    /// Percentage formatter over the named columns, e.g. `15.3` -> `"15.3%"`.
    pub fn percentage<S: Into<String>>(
        columns: Vec<S>,
        decimal_places: usize,
        multiply_by_100: bool,
    ) -> Self {
        Self {
            config: ColumnFormatConfig::new(
                columns,
                ValueFormat::Percentage {
                    decimal_places,
                    multiply_by_100,
                },
            ),
        }
    }

    /// Rounding formatter over the named columns.
    pub fn round<S: Into<String>>(columns: Vec<S>, decimal_places: usize) -> Self {
        Self {
            config: ColumnFormatConfig::new(columns, ValueFormat::Round { decimal_places }),
        }
    }

    fn format_cell(format: ValueFormat, cell: &Value) -> Value {
        let Some(x) = cell.as_f64() else {
            return cell.clone();
        };
        match format {
            ValueFormat::Percentage {
                decimal_places,
                multiply_by_100,
            } => {
                let x = if multiply_by_100 { x * 100.0 } else { x };
                Value::Str(format!("{x:.decimal_places$}%"))
            }
            ValueFormat::Round { decimal_places } => {
                let scale = 10f64.powi(decimal_places as i32);
                Value::Float((x * scale).round() / scale)
            }
        }
    }
}

impl Transformer for ColumnFormatter {
    fn name(&self) -> &str {
        "column_formatter"
    }

    fn apply(&self, frame: Frame) -> Result<Frame> {
        let mut out = frame;
        for column in &self.config.columns {
            if !out.has_column(column) {
                continue;
            }
            let format = self.config.format;
            out.map_column(column, |cell| Self::format_cell(format, cell))?;
        }
        Ok(out)
    }
}

// ============================================================================
// Column Selector
// ============================================================================

/// Keeps or drops named columns.
#[derive(Debug, Clone)]
pub struct ColumnSelector {
    config: ColumnSelectConfig,
}

impl ColumnSelector {
    pub fn from_config(config: ColumnSelectConfig) -> Self {
        Self { config }
    }

    pub fn keep<S: Into<String>>(columns: Vec<S>) -> Self {
        Self::from_config(ColumnSelectConfig::new(columns, SelectMode::Keep))
    }

    pub fn drop<S: Into<String>>(columns: Vec<S>) -> Self {
        Self::from_config(ColumnSelectConfig::new(columns, SelectMode::Drop))
    }
}

impl Transformer for ColumnSelector {
    fn name(&self) -> &str {
        "column_selector"
    }

    fn apply(&self, frame: Frame) -> Result<Frame> {
        Ok(match self.config.mode {
            SelectMode::Keep => frame.keep_columns(&self.config.columns),
            SelectMode::Drop => frame.drop_columns(&self.config.columns),
        })
    }
}

// ============================================================================
// Pivot Transformer
// ============================================================================

/// [`frame::Pivot`] adapted to the transformer contract, so the long-to-wide
/// reshape can run inside a pipeline hook.
#[derive(Debug, Clone)]
pub struct PivotTransformer {
    pivot: Pivot,
}

impl PivotTransformer {
    pub fn new(pivot: Pivot) -> Self {
        Self { pivot }
    }
}

impl Transformer for PivotTransformer {
    fn name(&self) -> &str {
        "pivot"
    }

    fn apply(&self, frame: Frame) -> Result<Frame> {
        Ok(self.pivot.apply(&frame)?)
    }
}
