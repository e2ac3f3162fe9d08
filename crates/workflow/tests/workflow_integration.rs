//! End-to-end workflow tests with in-memory collaborators.

use chrono::NaiveDate;
use detect_api::EngineConfig;
use detect_core::ComparisonEngine;
use frame::{Frame, Pivot, Value};
use std::sync::Arc;
use transform_api::FilterMode;
use transform_core::{PivotTransformer, TransformPipeline, ValueFilter};
use transform_spi::Hook;
use workflow::{
    AnomalyDetectionWorkflow, Forecaster, ForecastWorkflow, FrameReader, MemoryReader,
    MemoryWriter, Result, WorkflowError,
};

const CELL: &str = "100|90|92|95|98|100|102|105|108|110";

fn date(day: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(2025, 6, day).unwrap())
}

/// Emits the same quantile cell for every metric over the horizon.
struct ConstantForecaster;

impl Forecaster for ConstantForecaster {
    fn name(&self) -> &str {
        "constant"
    }

    fn forecast(&self, history: Frame, horizon: usize) -> Result<Frame> {
        let mut frame = Frame::new();
        for name in history.column_names() {
            let values = if name == "date" {
                (1..=horizon).map(|d| date(20 + d as u32)).collect()
            } else {
                vec![Value::from(CELL); horizon]
            };
            frame.push_column(name.to_string(), values)?;
        }
        Ok(frame)
    }
}

/// Long actual observations: one row per (date, platform).
fn long_actuals() -> Frame {
    Frame::from_columns(vec![
        ("date", vec![date(1), date(1), date(2), date(2)]),
        (
            "platform",
            vec![
                Value::from("desktop"),
                Value::from("mobile"),
                Value::from("desktop"),
                Value::from("mobile"),
            ],
        ),
        (
            "sessions",
            vec![
                Value::Float(100.0),
                Value::Float(115.0),
                Value::Float(99.0),
                Value::Float(80.0),
            ],
        ),
    ])
    .unwrap()
}

/// Wide forecast batch matching the pivoted actual layout.
fn wide_forecast() -> Frame {
    Frame::from_columns(vec![
        ("date", vec![date(1), date(2)]),
        ("desktop", vec![Value::from(CELL), Value::from(CELL)]),
        ("mobile", vec![Value::from(CELL), Value::from(CELL)]),
    ])
    .unwrap()
}

#[test]
fn test_detection_end_to_end() {
    let engine = ComparisonEngine::new(
        EngineConfig::default().with_dimension_names(vec!["platform"]),
    )
    .unwrap();

    let pipeline = TransformPipeline::builder()
        .at(
            Hook::Before,
            Box::new(PivotTransformer::new(Pivot::new(
                vec!["date"],
                vec!["platform"],
                "sessions",
            ))),
        )
        .at(
            Hook::After,
            Box::new(ValueFilter::members(
                "status",
                vec![Value::from("ABOVE_UPPER"), Value::from("BELOW_LOWER")],
                FilterMode::Include,
            )),
        )
        .build();

    let writer = Arc::new(MemoryWriter::new());
    let workflow = AnomalyDetectionWorkflow::new(
        Box::new(MemoryReader::named("forecast", wide_forecast())),
        Box::new(MemoryReader::named("actual", long_actuals())),
        Box::new(engine),
    )
    .with_pipeline(pipeline)
    .with_writer(Box::new(writer.clone()));

    let report = workflow.run().unwrap();

    // 115 above the 110 upper bound, 80 below the 90 lower bound.
    assert_eq!(report.n_rows(), 2);
    let platforms: Vec<&str> = report
        .column("platform")
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(platforms, vec!["mobile", "mobile"]);
    let statuses: Vec<&str> = report
        .column("status")
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(statuses, vec!["ABOVE_UPPER", "BELOW_LOWER"]);

    // Writer captured the same report.
    assert_eq!(writer.last().unwrap(), report);
}

#[test]
fn test_detection_rejects_empty_batches() {
    let engine = ComparisonEngine::new(EngineConfig::default()).unwrap();
    let workflow = AnomalyDetectionWorkflow::new(
        Box::new(MemoryReader::named("forecast", Frame::new())),
        Box::new(MemoryReader::named("actual", long_actuals())),
        Box::new(engine),
    );
    assert!(matches!(
        workflow.run().unwrap_err(),
        WorkflowError::EmptyBatch(ref which) if which == "forecast"
    ));
}

#[test]
fn test_forecast_end_to_end() {
    let history = Frame::from_columns(vec![
        ("date", vec![date(1), date(2), date(3)]),
        (
            "sessions",
            vec![Value::Float(100.0), Value::Float(101.0), Value::Float(99.0)],
        ),
    ])
    .unwrap();

    let writer = Arc::new(MemoryWriter::new());
    let workflow = ForecastWorkflow::new(
        Box::new(MemoryReader::new(history)),
        Box::new(ConstantForecaster),
        2,
    )
    .unwrap()
    .with_writer(Box::new(writer.clone()));

    let forecast = workflow.run().unwrap();
    assert_eq!(forecast.n_rows(), 2);
    assert_eq!(forecast.cell("sessions", 0), Some(&Value::from(CELL)));
    assert_eq!(writer.written().len(), 1);
}

#[test]
fn test_forecast_rejects_zero_horizon() {
    let result = ForecastWorkflow::new(
        Box::new(MemoryReader::new(long_actuals())),
        Box::new(ConstantForecaster),
        0,
    );
    assert!(matches!(
        result.err(),
        Some(WorkflowError::InvalidParameter { ref name, .. }) if name == "horizon"
    ));
}

#[test]
fn test_forecast_rejects_empty_history() {
    let workflow = ForecastWorkflow::new(
        Box::new(MemoryReader::new(Frame::new())),
        Box::new(ConstantForecaster),
        1,
    )
    .unwrap();
    assert!(matches!(
        workflow.run().unwrap_err(),
        WorkflowError::EmptyBatch(ref which) if which == "history"
    ));
}

#[test]
fn test_reader_error_propagates() {
    struct FailingReader;

    impl FrameReader for FailingReader {
        fn name(&self) -> &str {
            "failing"
        }

        fn load(&self) -> Result<Frame> {
            Err(WorkflowError::Source {
                name: "failing".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    let workflow = ForecastWorkflow::new(
        Box::new(FailingReader),
        Box::new(ConstantForecaster),
        1,
    )
    .unwrap();
    assert!(matches!(
        workflow.run().unwrap_err(),
        WorkflowError::Source { .. }
    ));
}
