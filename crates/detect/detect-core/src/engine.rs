//! Forecast-actual comparison engine.

use crate::decompose::MetricDecomposer;
use detect_api::EngineConfig;
use detect_spi::{
    AlertStatus, AnomalyDetector, ComparisonResult, DetectError, QuantileBounds, QuantileVector,
    Result,
};
use frame::{Frame, Value};
use std::collections::{BTreeSet, HashMap};
use transform_core::TransformPipeline;
use transform_spi::Hook;

/// Classified values for one metric cell pair, before the date and dimension
/// context is attached.
struct Classified {
    actual: f64,
    forecast: f64,
    lower: f64,
    upper: f64,
    status: AlertStatus,
    deviation_pct: f64,
    zero_bound: bool,
}

/// Compares a forecast batch against an actual batch, one row per joined
/// (date, metric) pair.
///
/// Forecast cells hold the pipe-delimited quantile wire encoding; actual
/// cells hold observed numeric values. The two batches are joined on the
/// configured date column when both carry it, and by row position otherwise.
/// Metric columns are the union of both batches' non-date columns, so a
/// metric present only in the actual batch still produces rows (classified
/// NO_FORECAST), and a metric present only in the forecast batch produces
/// none.
pub struct ComparisonEngine {
    config: EngineConfig,
    decomposer: Option<MetricDecomposer>,
    pipeline: TransformPipeline,
}

impl std::fmt::Debug for ComparisonEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonEngine")
            .field("config", &self.config)
            .field("decomposer", &self.decomposer)
            .finish_non_exhaustive()
    }
}

impl ComparisonEngine {
    /// Builds an engine, validating the configured bound indices up front.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let b = config.bounds;
        QuantileBounds::new(b.lower, b.upper, b.point)?;
        let decomposer = config
            .dimension_names
            .clone()
            .map(|names| MetricDecomposer::new(names, config.separator));
        Ok(Self {
            config,
            decomposer,
            pipeline: TransformPipeline::empty(),
        })
    }

    /// Attaches a pipeline whose [`Hook::AfterDetection`] chain runs on the
    /// result frame produced by [`detect`](AnomalyDetector::detect).
    pub fn with_pipeline(mut self, pipeline: TransformPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compares the two batches and returns structured result rows.
    ///
    /// Forecast rows whose date has no actual counterpart are skipped, as are
    /// pairs whose actual cell is null (forecast-only metrics at that date).
    pub fn compare(&self, forecast: &Frame, actual: &Frame) -> Result<Vec<ComparisonResult>> {
        if forecast.is_empty() {
            return Err(DetectError::EmptyBatch("forecast".to_string()));
        }
        if actual.is_empty() {
            return Err(DetectError::EmptyBatch("actual".to_string()));
        }

        let date_column = self.config.date_column.as_str();
        let join_on_date = forecast.has_column(date_column) && actual.has_column(date_column);

        let mut metrics: BTreeSet<&str> = BTreeSet::new();
        for name in forecast.column_names() {
            if name != date_column {
                metrics.insert(name);
            }
        }
        for name in actual.column_names() {
            if name != date_column {
                metrics.insert(name);
            }
        }

        // First occurrence wins for duplicate dates in the actual batch.
        let mut actual_rows: HashMap<String, usize> = HashMap::new();
        if join_on_date {
            if let Some(dates) = actual.get(date_column) {
                for (row, cell) in dates.iter().enumerate() {
                    actual_rows.entry(cell.to_string()).or_insert(row);
                }
            }
        }

        let mut results = Vec::new();
        for row in 0..forecast.n_rows() {
            let (date, actual_row) = if join_on_date {
                let Some(cell) = forecast.cell(date_column, row) else {
                    continue;
                };
                let Some(&actual_row) = actual_rows.get(&cell.to_string()) else {
                    continue;
                };
                (cell.as_date(), actual_row)
            } else {
                if row >= actual.n_rows() {
                    continue;
                }
                (None, row)
            };

            for metric in &metrics {
                let pair = self.classify(
                    forecast.cell(metric, row),
                    actual.cell(metric, actual_row),
                )?;
                let Some(c) = pair else { continue };
                let dimensions = match &self.decomposer {
                    Some(decomposer) => decomposer.decompose(metric)?,
                    None => Vec::new(),
                };
                results.push(ComparisonResult {
                    date,
                    metric: metric.to_string(),
                    dimensions,
                    actual: c.actual,
                    forecast: c.forecast,
                    lower: c.lower,
                    upper: c.upper,
                    status: c.status,
                    deviation_pct: c.deviation_pct,
                    zero_bound: c.zero_bound,
                });
            }
        }
        Ok(results)
    }

    /// Classifies one cell pair, or `None` when there is nothing observed to
    /// classify.
    fn classify(
        &self,
        forecast_cell: Option<&Value>,
        actual_cell: Option<&Value>,
    ) -> Result<Option<Classified>> {
        // A numeric actual is required; a non-numeric cell must not be
        // mistaken for an observed zero.
        let actual = match actual_cell {
            None | Some(Value::Null) => return Ok(None),
            Some(v) => v.as_f64().ok_or_else(|| DetectError::MalformedActual {
                cell: v.to_string(),
            })?,
        };
        // A missing or null forecast cell stands in for the all-zero sentinel
        // that forecast sources emit when no prediction was produced.
        let vector = match forecast_cell {
            None | Some(Value::Null) => QuantileVector::sentinel(),
            Some(Value::Str(cell)) => QuantileVector::parse(cell)?,
            Some(other) => QuantileVector::parse(&other.to_string())?,
        };

        let bounds = self.config.bounds;
        let lower = vector.value_at(bounds.lower);
        let upper = vector.value_at(bounds.upper);
        let forecast = vector.value_at(bounds.point);

        if vector.is_sentinel(bounds) || lower.is_nan() || upper.is_nan() {
            return Ok(Some(Classified {
                actual,
                forecast,
                lower,
                upper,
                status: AlertStatus::NoForecast,
                deviation_pct: 0.0,
                zero_bound: false,
            }));
        }

        let (status, deviation_pct, zero_bound) = if actual < lower {
            if lower == 0.0 {
                (AlertStatus::BelowLower, 0.0, true)
            } else {
                (AlertStatus::BelowLower, (lower - actual) / lower * 100.0, false)
            }
        } else if actual > upper {
            if upper == 0.0 {
                (AlertStatus::AboveUpper, 0.0, true)
            } else {
                (AlertStatus::AboveUpper, (actual - upper) / upper * 100.0, false)
            }
        } else {
            (AlertStatus::InRange, 0.0, false)
        };

        Ok(Some(Classified {
            actual,
            forecast,
            lower,
            upper,
            status,
            deviation_pct,
            zero_bound,
        }))
    }

    /// Lays result rows out as a frame with a fixed schema: the date column,
    /// `metric`, one column per configured dimension, then `actual`,
    /// `forecast`, `lower`, `upper`, `status`, `deviation_pct`, `zero_bound`.
    /// An empty result set still yields the full (zero-row) schema.
    pub fn results_to_frame(&self, results: &[ComparisonResult]) -> Result<Frame> {
        let dimension_names: &[String] = self
            .decomposer
            .as_ref()
            .map_or(&[], MetricDecomposer::names);

        let n = results.len();
        let mut dates = Vec::with_capacity(n);
        let mut metrics = Vec::with_capacity(n);
        let mut dimension_columns: Vec<Vec<Value>> =
            vec![Vec::with_capacity(n); dimension_names.len()];
        let mut actuals = Vec::with_capacity(n);
        let mut forecasts = Vec::with_capacity(n);
        let mut lowers = Vec::with_capacity(n);
        let mut uppers = Vec::with_capacity(n);
        let mut statuses = Vec::with_capacity(n);
        let mut deviations = Vec::with_capacity(n);
        let mut zero_bounds = Vec::with_capacity(n);

        for result in results {
            dates.push(result.date.map_or(Value::Null, Value::Date));
            metrics.push(Value::Str(result.metric.clone()));
            for (column, (_, value)) in dimension_columns.iter_mut().zip(&result.dimensions) {
                column.push(Value::Str(value.clone()));
            }
            actuals.push(Value::Float(result.actual));
            forecasts.push(Value::Float(result.forecast));
            lowers.push(Value::Float(result.lower));
            uppers.push(Value::Float(result.upper));
            statuses.push(Value::Str(result.status.as_str().to_string()));
            deviations.push(Value::Float(result.deviation_pct));
            zero_bounds.push(Value::Bool(result.zero_bound));
        }

        let mut frame = Frame::new();
        frame.push_column(self.config.date_column.clone(), dates)?;
        frame.push_column("metric", metrics)?;
        for (name, values) in dimension_names.iter().zip(dimension_columns) {
            frame.push_column(name.clone(), values)?;
        }
        frame.push_column("actual", actuals)?;
        frame.push_column("forecast", forecasts)?;
        frame.push_column("lower", lowers)?;
        frame.push_column("upper", uppers)?;
        frame.push_column("status", statuses)?;
        frame.push_column("deviation_pct", deviations)?;
        frame.push_column("zero_bound", zero_bounds)?;
        Ok(frame)
    }
}

impl AnomalyDetector for ComparisonEngine {
    fn name(&self) -> &str {
        "forecast_actual"
    }

    fn detect(&self, forecast: Frame, actual: Frame) -> Result<Frame> {
        let results = self.compare(&forecast, &actual)?;
        let frame = self.results_to_frame(&results)?;
        Ok(self.pipeline.apply(Hook::AfterDetection, frame)?)
    }
}
