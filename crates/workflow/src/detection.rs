//! Anomaly detection workflow.

use crate::contract::{FrameReader, FrameWriter};
use crate::error::{Result, WorkflowError};
use detect_spi::AnomalyDetector;
use frame::Frame;
use tracing::{debug, info};
use transform_core::TransformPipeline;
use transform_spi::Hook;

/// Orchestrates one detection run: load forecast and actual batches, shape
/// the actual batch, detect, shape the report, optionally persist.
///
/// The [`Hook::Before`] chain runs on the actual batch only; the actual side
/// typically arrives long (one row per observation) and is pivoted here into
/// the wide layout the detector joins against. The forecast batch is loaded
/// as-is.
pub struct AnomalyDetectionWorkflow {
    forecast_reader: Box<dyn FrameReader>,
    actual_reader: Box<dyn FrameReader>,
    detector: Box<dyn AnomalyDetector>,
    pipeline: TransformPipeline,
    writer: Option<Box<dyn FrameWriter>>,
}

impl AnomalyDetectionWorkflow {
    pub fn new(
        forecast_reader: Box<dyn FrameReader>,
        actual_reader: Box<dyn FrameReader>,
        detector: Box<dyn AnomalyDetector>,
    ) -> Self {
        Self {
            forecast_reader,
            actual_reader,
            detector,
            pipeline: TransformPipeline::empty(),
            writer: None,
        }
    }

    /// Pipeline whose [`Hook::Before`] chain shapes the actual batch and
    /// whose [`Hook::After`] chain shapes the detection report.
    pub fn with_pipeline(mut self, pipeline: TransformPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_writer(mut self, writer: Box<dyn FrameWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Runs the workflow and returns the detection report.
    pub fn run(&self) -> Result<Frame> {
        info!(
            forecast_reader = self.forecast_reader.name(),
            actual_reader = self.actual_reader.name(),
            detector = self.detector.name(),
            "detection workflow starting"
        );

        let forecast = self.forecast_reader.load()?;
        if forecast.is_empty() {
            return Err(WorkflowError::EmptyBatch("forecast".to_string()));
        }
        let actual = self.actual_reader.load()?;
        if actual.is_empty() {
            return Err(WorkflowError::EmptyBatch("actual".to_string()));
        }
        debug!(
            forecast_rows = forecast.n_rows(),
            actual_rows = actual.n_rows(),
            "batches loaded"
        );

        let actual = self.pipeline.apply(Hook::Before, actual)?;
        let report = self.detector.detect(forecast, actual)?;
        debug!(rows = report.n_rows(), "report produced");

        let report = self.pipeline.apply(Hook::After, report)?;
        if let Some(writer) = &self.writer {
            writer.write(report.clone())?;
            info!(writer = writer.name(), "report written");
        }
        Ok(report)
    }
}
