//! Quantile vector codec and bound configuration.

use crate::error::{DetectError, Result};
use serde::{Deserialize, Serialize};

/// Number of quantile slots in a forecast cell.
pub const QUANTILE_COUNT: usize = 10;

/// Delimiter joining quantile values in the wire representation.
pub const QUANTILE_DELIMITER: char = '|';

/// Ordered sequence of exactly [`QUANTILE_COUNT`] quantile predictions for
/// one metric at one time point.
///
/// Only index positions are trusted; the upstream model does not guarantee
/// the values are monotone, so nothing here assumes ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileVector {
    values: [f64; QUANTILE_COUNT],
}

impl QuantileVector {
    pub fn new(values: [f64; QUANTILE_COUNT]) -> Self {
        Self { values }
    }

    /// All-zero vector: the wire encoding a forecast source emits when no
    /// forecast was produced.
    pub fn sentinel() -> Self {
        Self::new([0.0; QUANTILE_COUNT])
    }

    /// Decodes the pipe-delimited wire representation. The split must yield
    /// exactly [`QUANTILE_COUNT`] numeric tokens.
    pub fn parse(cell: &str) -> Result<Self> {
        let tokens: Vec<&str> = cell.split(QUANTILE_DELIMITER).collect();
        if tokens.len() != QUANTILE_COUNT {
            return Err(DetectError::MalformedQuantile {
                cell: cell.to_string(),
                reason: format!("expected {QUANTILE_COUNT} tokens, got {}", tokens.len()),
            });
        }
        let mut values = [0.0; QUANTILE_COUNT];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token.trim().parse::<f64>().map_err(|_| {
                DetectError::MalformedQuantile {
                    cell: cell.to_string(),
                    reason: format!("token '{token}' is not numeric"),
                }
            })?;
        }
        Ok(Self { values })
    }

    /// Encodes back to the pipe-delimited wire representation.
    pub fn encode(&self) -> String {
        self.values
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(&QUANTILE_DELIMITER.to_string())
    }

    pub fn values(&self) -> &[f64; QUANTILE_COUNT] {
        &self.values
    }

    /// Value at a bound index. Callers validate indices via
    /// [`QuantileBounds::new`] before reaching here.
    pub fn value_at(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// True when both configured bound positions are exactly zero: the
    /// "no forecast produced" sentinel, not a legitimate zero-width interval.
    pub fn is_sentinel(&self, bounds: QuantileBounds) -> bool {
        self.values[bounds.lower] == 0.0 && self.values[bounds.upper] == 0.0
    }
}

/// Index positions within a [`QuantileVector`] designating the lower bound,
/// upper bound, and point forecast.
///
/// Defaults to p10/p90 bounds (an 80% interval) with the median as the point
/// forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantileBounds {
    pub lower: usize,
    pub upper: usize,
    pub point: usize,
}

impl Default for QuantileBounds {
    fn default() -> Self {
        Self {
            lower: 1,
            upper: 9,
            point: 5,
        }
    }
}

impl QuantileBounds {
    /// Validated constructor: requires `lower < upper < QUANTILE_COUNT` and
    /// a point index inside the vector.
    pub fn new(lower: usize, upper: usize, point: usize) -> Result<Self> {
        if lower >= upper || upper >= QUANTILE_COUNT || point >= QUANTILE_COUNT {
            return Err(DetectError::InvalidQuantileIndex {
                lower,
                upper,
                point,
                len: QUANTILE_COUNT,
            });
        }
        Ok(Self {
            lower,
            upper,
            point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_cell() {
        let v = QuantileVector::parse("100|90|92|95|98|100|102|105|108|110").unwrap();
        assert_eq!(v.value_at(0), 100.0);
        assert_eq!(v.value_at(1), 90.0);
        assert_eq!(v.value_at(9), 110.0);
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        let err = QuantileVector::parse("1|2|3").unwrap_err();
        assert!(matches!(err, DetectError::MalformedQuantile { .. }));
        assert!(err.to_string().contains("got 3"));

        let err = QuantileVector::parse("1|2|3|4|5|6|7|8|9|10|11").unwrap_err();
        assert!(err.to_string().contains("got 11"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_token() {
        let err = QuantileVector::parse("1|2|x|4|5|6|7|8|9|10").unwrap_err();
        assert!(err.to_string().contains("'x' is not numeric"));
    }

    #[test]
    fn test_parse_rejects_empty_cell() {
        assert!(QuantileVector::parse("").is_err());
    }

    #[test]
    fn test_encode_round_trip() {
        let cell = "0.5|1|2|3|4|5|6|7|8|9.25";
        let v = QuantileVector::parse(cell).unwrap();
        let back = QuantileVector::parse(&v.encode()).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_sentinel_detection() {
        let bounds = QuantileBounds::default();
        assert!(QuantileVector::sentinel().is_sentinel(bounds));
        assert!(QuantileVector::parse("5|0|1|2|3|4|5|6|7|0")
            .unwrap()
            .is_sentinel(bounds));
        assert!(!QuantileVector::parse("0|1|0|0|0|0|0|0|0|2")
            .unwrap()
            .is_sentinel(bounds));
    }

    #[test]
    fn test_bounds_default() {
        let bounds = QuantileBounds::default();
        assert_eq!((bounds.lower, bounds.upper, bounds.point), (1, 9, 5));
    }

    #[test]
    fn test_bounds_validation() {
        assert!(QuantileBounds::new(2, 8, 5).is_ok());
        assert!(QuantileBounds::new(8, 2, 5).is_err());
        assert!(QuantileBounds::new(1, 1, 5).is_err());
        assert!(QuantileBounds::new(1, 10, 5).is_err());
        assert!(QuantileBounds::new(1, 9, 10).is_err());
    }

    #[test]
    fn test_no_monotonicity_assumed() {
        // Values out of order still parse; only positions matter.
        let v = QuantileVector::parse("100|90|92|95|98|100|102|105|108|80").unwrap();
        assert_eq!(v.value_at(9), 80.0);
    }
}
