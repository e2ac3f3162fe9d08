//! In-memory reader and writer, for embedding and tests.

use crate::contract::{FrameReader, FrameWriter};
use crate::error::Result;
use frame::Frame;
use std::sync::Mutex;

/// Reader over a frame already in memory. Each load hands out a fresh clone,
/// so callers can consume the batch by value without draining the reader.
#[derive(Debug, Clone)]
pub struct MemoryReader {
    name: String,
    frame: Frame,
}

impl MemoryReader {
    pub fn new(frame: Frame) -> Self {
        Self {
            name: "memory".to_string(),
            frame,
        }
    }

    pub fn named<S: Into<String>>(name: S, frame: Frame) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }
}

impl FrameReader for MemoryReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Frame> {
        Ok(self.frame.clone())
    }
}

/// Writer that collects every written frame, in write order.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    frames: Mutex<Vec<Frame>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn written(&self) -> Vec<Frame> {
        match self.frames.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent write, if any.
    pub fn last(&self) -> Option<Frame> {
        self.written().pop()
    }
}

impl FrameWriter for MemoryWriter {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&self, frame: Frame) -> Result<()> {
        match self.frames.lock() {
            Ok(mut guard) => guard.push(frame),
            Err(poisoned) => poisoned.into_inner().push(frame),
        }
        Ok(())
    }
}
