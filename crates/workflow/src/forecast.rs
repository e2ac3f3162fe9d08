//! Forecast generation workflow.

use crate::contract::{Forecaster, FrameReader, FrameWriter};
use crate::error::{Result, WorkflowError};
use frame::Frame;
use tracing::{debug, info};
use transform_core::TransformPipeline;
use transform_spi::Hook;

/// Orchestrates one forecast run: load history, transform it, forecast,
/// transform the output, optionally persist.
pub struct ForecastWorkflow {
    reader: Box<dyn FrameReader>,
    forecaster: Box<dyn Forecaster>,
    pipeline: TransformPipeline,
    writer: Option<Box<dyn FrameWriter>>,
    horizon: usize,
}

impl ForecastWorkflow {
    /// Builds a workflow. The horizon must be at least one time point.
    pub fn new(
        reader: Box<dyn FrameReader>,
        forecaster: Box<dyn Forecaster>,
        horizon: usize,
    ) -> Result<Self> {
        if horizon == 0 {
            return Err(WorkflowError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            reader,
            forecaster,
            pipeline: TransformPipeline::empty(),
            writer: None,
            horizon,
        })
    }

    /// Pipeline whose [`Hook::Before`] chain shapes the history and whose
    /// [`Hook::After`] chain shapes the forecast output.
    pub fn with_pipeline(mut self, pipeline: TransformPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_writer(mut self, writer: Box<dyn FrameWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Runs the workflow and returns the forecast batch.
    pub fn run(&self) -> Result<Frame> {
        info!(
            reader = self.reader.name(),
            forecaster = self.forecaster.name(),
            horizon = self.horizon,
            "forecast workflow starting"
        );

        let history = self.reader.load()?;
        if history.is_empty() {
            return Err(WorkflowError::EmptyBatch("history".to_string()));
        }
        debug!(rows = history.n_rows(), cols = history.n_cols(), "history loaded");

        let history = self.pipeline.apply(Hook::Before, history)?;
        let forecast = self.forecaster.forecast(history, self.horizon)?;
        debug!(rows = forecast.n_rows(), "forecast produced");

        let forecast = self.pipeline.apply(Hook::After, forecast)?;
        if let Some(writer) = &self.writer {
            writer.write(forecast.clone())?;
            info!(writer = writer.name(), "forecast written");
        }
        Ok(forecast)
    }
}
