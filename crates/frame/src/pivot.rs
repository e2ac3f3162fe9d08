//! Long-to-wide pivot.

use crate::error::Result;
use crate::table::Frame;
use crate::value::Value;
use std::collections::{BTreeSet, HashMap};

/// Separator used when joining dimension values into a metric key. The same
/// separator must be handed to the decomposer for the key to round-trip.
pub const KEY_SEPARATOR: char = '_';

/// Pivots a long-format frame (index columns, dimension columns, one value
/// column) into a wide frame with one row per unique index tuple and one
/// column per unique dimension tuple.
///
/// Duplicate (index, dimension) combinations aggregate by sum. Combinations
/// never observed are filled with a configurable fill value, `Value::Null` by
/// default, so "no observation" stays distinct from an observed zero.
#[derive(Debug, Clone)]
pub struct Pivot {
    index_columns: Vec<String>,
    dimension_columns: Vec<String>,
    value_column: String,
    fill: Value,
    separator: char,
}

impl Pivot {
    pub fn new<S: Into<String>>(
        index_columns: Vec<S>,
        dimension_columns: Vec<S>,
        value_column: S,
    ) -> Self {
        Self {
            index_columns: index_columns.into_iter().map(Into::into).collect(),
            dimension_columns: dimension_columns.into_iter().map(Into::into).collect(),
            value_column: value_column.into(),
            fill: Value::Null,
            separator: KEY_SEPARATOR,
        }
    }

    /// Overrides the fill value for missing combinations.
    pub fn with_fill(mut self, fill: Value) -> Self {
        self.fill = fill;
        self
    }

    /// Overrides the metric-key separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Runs the pivot. An empty input produces an empty output; a missing
    /// index/dimension/value column is a `MissingColumn` error.
    pub fn apply(&self, frame: &Frame) -> Result<Frame> {
        for name in self
            .index_columns
            .iter()
            .chain(self.dimension_columns.iter())
            .chain(std::iter::once(&self.value_column))
        {
            frame.column(name)?;
        }
        if frame.is_empty() {
            return Ok(Frame::new());
        }

        // One output row per unique index tuple, in first-appearance order.
        // The composite lookup key joins index cell renderings with a unit
        // separator to keep tuples unambiguous.
        let mut row_lookup: HashMap<String, usize> = HashMap::new();
        let mut index_cells: Vec<Vec<Value>> = Vec::new();
        let mut metric_names: BTreeSet<String> = BTreeSet::new();
        let mut sums: HashMap<(usize, String), f64> = HashMap::new();

        for row in 0..frame.n_rows() {
            let idx_vals: Vec<Value> = self
                .index_columns
                .iter()
                .map(|name| frame.cell(name, row).cloned().unwrap_or(Value::Null))
                .collect();
            let row_key = idx_vals
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\u{1f}");
            let out_row = *row_lookup.entry(row_key).or_insert_with(|| {
                index_cells.push(idx_vals);
                index_cells.len() - 1
            });

            let metric = self
                .dimension_columns
                .iter()
                .map(|name| {
                    frame
                        .cell(name, row)
                        .cloned()
                        .unwrap_or(Value::Null)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(&self.separator.to_string());
            metric_names.insert(metric.clone());

            let observed = frame
                .cell(&self.value_column, row)
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            *sums.entry((out_row, metric)).or_insert(0.0) += observed;
        }

        let n_out = index_cells.len();
        let mut out = Frame::new();
        for (col, name) in self.index_columns.iter().enumerate() {
            let values = index_cells.iter().map(|row| row[col].clone()).collect();
            out.push_column(name.clone(), values)?;
        }
        for metric in metric_names {
            let values = (0..n_out)
                .map(|row| match sums.get(&(row, metric.clone())) {
                    Some(&sum) => Value::Float(sum),
                    None => self.fill.clone(),
                })
                .collect();
            out.push_column(metric, values)?;
        }
        Ok(out)
    }
}
