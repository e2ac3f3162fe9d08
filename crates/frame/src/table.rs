//! Columnar frame.

use crate::error::{FrameError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Column {
    name: String,
    values: Vec<Value>,
}

/// Ordered set of named, equal-length columns.
///
/// Frames are value-like snapshots: every pipeline stage consumes its input
/// frame by value and produces a new one, so no stage can observe a later
/// stage's mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    /// Creates an empty frame with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from `(name, values)` pairs, validating lengths and
    /// name uniqueness.
    pub fn from_columns<N: Into<String>>(columns: Vec<(N, Vec<Value>)>) -> Result<Self> {
        let mut frame = Frame::new();
        for (name, values) in columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Number of rows (0 for a column-less frame).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column values, or `MissingColumn`.
    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.get(name)
            .ok_or_else(|| FrameError::MissingColumn(name.to_string()))
    }

    /// Column values, if the column exists.
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Single cell, if both column and row exist.
    pub fn cell(&self, name: &str, row: usize) -> Option<&Value> {
        self.get(name).and_then(|values| values.get(row))
    }

    /// Appends a column. Fails on duplicate names or row-count mismatch.
    pub fn push_column<N: Into<String>>(&mut self, name: N, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(FrameError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(FrameError::LengthMismatch {
                name,
                expected: self.n_rows(),
                got: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Builder-style [`push_column`](Self::push_column).
    pub fn with_column<N: Into<String>>(mut self, name: N, values: Vec<Value>) -> Result<Self> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Replaces every cell of `name` with `f(cell)`.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Value,
    {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| FrameError::MissingColumn(name.to_string()))?;
        for cell in &mut column.values {
            *cell = f(cell);
        }
        Ok(())
    }

    /// New frame containing the given rows, in the given order. Indices may
    /// repeat; out-of-range indices are ignored.
    pub fn select_rows(&self, indices: &[usize]) -> Frame {
        let n = self.n_rows();
        let kept: Vec<usize> = indices.iter().copied().filter(|&i| i < n).collect();
        Frame {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: kept.iter().map(|&i| c.values[i].clone()).collect(),
                })
                .collect(),
        }
    }

    /// Keeps rows whose mask entry is true, preserving order.
    pub fn retain_rows(&self, keep: &[bool]) -> Frame {
        let indices: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| if k { Some(i) } else { None })
            .collect();
        self.select_rows(&indices)
    }

    /// New frame with only the named columns, in the listed order. Names not
    /// present in the frame are ignored.
    pub fn keep_columns(&self, names: &[String]) -> Frame {
        Frame {
            columns: names
                .iter()
                .filter_map(|name| self.columns.iter().find(|c| &c.name == name).cloned())
                .collect(),
        }
    }

    /// New frame without the named columns.
    pub fn drop_columns(&self, names: &[String]) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .filter(|c| !names.contains(&c.name))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_columns(vec![
            (
                "metric",
                vec![Value::from("a"), Value::from("b"), Value::from("c")],
            ),
            (
                "sessions",
                vec![Value::Float(10.0), Value::Float(20.0), Value::Float(30.0)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_shape() {
        let frame = sample();
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(frame.n_cols(), 2);
        assert_eq!(frame.column_names(), vec!["metric", "sessions"]);
    }

    #[test]
    fn test_push_column_rejects_length_mismatch() {
        let mut frame = sample();
        let err = frame
            .push_column("extra", vec![Value::Float(1.0)])
            .unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { .. }));
    }

    #[test]
    fn test_push_column_rejects_duplicate() {
        let mut frame = sample();
        let err = frame
            .push_column("metric", vec![Value::Null, Value::Null, Value::Null])
            .unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(_)));
    }

    #[test]
    fn test_missing_column_error() {
        let frame = sample();
        let err = frame.column("nope").unwrap_err();
        assert!(matches!(err, FrameError::MissingColumn(_)));
    }

    #[test]
    fn test_select_rows_reorders_and_repeats() {
        let frame = sample();
        let picked = frame.select_rows(&[2, 0, 2]);
        assert_eq!(picked.n_rows(), 3);
        assert_eq!(picked.cell("metric", 0), Some(&Value::from("c")));
        assert_eq!(picked.cell("metric", 1), Some(&Value::from("a")));
        assert_eq!(picked.cell("metric", 2), Some(&Value::from("c")));
    }

    #[test]
    fn test_retain_rows_mask() {
        let frame = sample();
        let kept = frame.retain_rows(&[true, false, true]);
        assert_eq!(kept.n_rows(), 2);
        assert_eq!(kept.cell("sessions", 1), Some(&Value::Float(30.0)));
    }

    #[test]
    fn test_keep_and_drop_columns() {
        let frame = sample();
        let kept = frame.keep_columns(&["sessions".to_string(), "ghost".to_string()]);
        assert_eq!(kept.column_names(), vec!["sessions"]);
        assert_eq!(kept.n_rows(), 3);

        let dropped = frame.drop_columns(&["sessions".to_string()]);
        assert_eq!(dropped.column_names(), vec!["metric"]);
    }

    #[test]
    fn test_map_column() {
        let mut frame = sample();
        frame
            .map_column("sessions", |v| match v.as_f64() {
                Some(x) => Value::Float(x * 2.0),
                None => v.clone(),
            })
            .unwrap();
        assert_eq!(frame.cell("sessions", 2), Some(&Value::Float(60.0)));
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.n_rows(), 0);
        assert_eq!(frame.select_rows(&[0, 1]).n_rows(), 0);
    }
}
