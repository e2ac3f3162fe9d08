//! Hook-keyed transform pipeline.

use frame::Frame;
use std::collections::BTreeMap;
use transform_spi::{Hook, Result, Transformer};

/// Ordered transformer chains keyed by [`Hook`], assembled once via
/// [`TransformPipelineBuilder`] and immutable afterwards.
///
/// Applying a hook with no registered transformers is the identity. A failing
/// transformer aborts the remaining chain for that hook and propagates its
/// error; transformers already applied are not rolled back, because frames
/// are value snapshots passed forward, never shared state.
#[derive(Default)]
pub struct TransformPipeline {
    hooks: BTreeMap<Hook, Vec<Box<dyn Transformer>>>,
}

impl TransformPipeline {
    pub fn builder() -> TransformPipelineBuilder {
        TransformPipelineBuilder::default()
    }

    /// Pipeline that never touches any batch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of transformers registered at a hook.
    pub fn len_at(&self, hook: Hook) -> usize {
        self.hooks.get(&hook).map_or(0, Vec::len)
    }

    /// Applies the chain registered at `hook` strictly left-to-right.
    pub fn apply(&self, hook: Hook, frame: Frame) -> Result<Frame> {
        let Some(chain) = self.hooks.get(&hook) else {
            return Ok(frame);
        };
        let mut current = frame;
        for step in chain {
            current = step.apply(current)?;
        }
        Ok(current)
    }
}

/// Builder for [`TransformPipeline`].
#[derive(Default)]
pub struct TransformPipelineBuilder {
    hooks: BTreeMap<Hook, Vec<Box<dyn Transformer>>>,
}

impl TransformPipelineBuilder {
    /// Appends a transformer to the chain at `hook`.
    pub fn at(mut self, hook: Hook, transformer: Box<dyn Transformer>) -> Self {
        self.hooks.entry(hook).or_default().push(transformer);
        self
    }

    pub fn build(self) -> TransformPipeline {
        TransformPipeline { hooks: self.hooks }
    }
}
