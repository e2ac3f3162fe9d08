//! Metric key decomposition.

use detect_spi::{DetectError, Result};

/// Splits joined metric keys back into named dimension values.
///
/// A key produced by pivoting `platform` and `channel` with `'_'` looks like
/// `"desktop_organic"`; decomposing it against `["platform", "channel"]`
/// yields `[("platform", "desktop"), ("channel", "organic")]`. The split must
/// produce exactly one segment per dimension name; dimension values that
/// themselves contain the separator cannot be recovered and surface as a
/// [`DetectError::DimensionMismatch`].
#[derive(Debug, Clone)]
pub struct MetricDecomposer {
    names: Vec<String>,
    separator: char,
}

impl MetricDecomposer {
    pub fn new<S: Into<String>>(names: Vec<S>, separator: char) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            separator,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Splits `key` into `(name, value)` pairs in configured order.
    pub fn decompose(&self, key: &str) -> Result<Vec<(String, String)>> {
        let segments: Vec<&str> = key.split(self.separator).collect();
        if segments.len() != self.names.len() {
            return Err(DetectError::DimensionMismatch {
                key: key.to_string(),
                expected: self.names.len(),
                got: segments.len(),
            });
        }
        Ok(self
            .names
            .iter()
            .zip(segments)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_two_dimensions() {
        let decomposer = MetricDecomposer::new(vec!["platform", "channel"], '_');
        let dims = decomposer.decompose("desktop_organic").unwrap();
        assert_eq!(
            dims,
            vec![
                ("platform".to_string(), "desktop".to_string()),
                ("channel".to_string(), "organic".to_string()),
            ]
        );
    }

    #[test]
    fn test_decompose_three_dimensions() {
        let decomposer = MetricDecomposer::new(vec!["platform", "channel", "page"], '_');
        let dims = decomposer.decompose("desktop_organic_homepage").unwrap();
        assert_eq!(dims[2], ("page".to_string(), "homepage".to_string()));
    }

    #[test]
    fn test_segment_count_mismatch_is_an_error() {
        let decomposer = MetricDecomposer::new(vec!["platform", "channel", "page"], '_');
        let err = decomposer.decompose("desktop_organic").unwrap_err();
        assert!(matches!(
            err,
            DetectError::DimensionMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_separator_inside_value_cannot_be_recovered() {
        // "north_america" splits into two segments against one name.
        let decomposer = MetricDecomposer::new(vec!["region"], '_');
        assert!(decomposer.decompose("north_america").is_err());
    }

    #[test]
    fn test_custom_separator() {
        let decomposer = MetricDecomposer::new(vec!["platform", "channel"], '-');
        let dims = decomposer.decompose("mobile-paid").unwrap();
        assert_eq!(dims[0].1, "mobile");
        assert_eq!(dims[1].1, "paid");
    }
}
