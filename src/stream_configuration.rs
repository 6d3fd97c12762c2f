//! Configuration types for stream operations

use serde::Deserialize;

use crate::error::{StreamError, StreamResult};

/// Sliding window configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of elements in every emitted window
    pub size: usize,
    /// Backing buffer holds at most `compaction * size` elements before it is compacted
    pub compaction: usize,
}

impl WindowConfig {
    pub fn new(size: usize, compaction: usize) -> Self {
        Self { size, compaction }
    }

    pub fn validate(&self) -> StreamResult<()> {
        if self.size == 0 {
            return Err(StreamError::Config("window size must be at least 1".into()));
        }
        if self.compaction == 0 {
            return Err(StreamError::Config("compaction factor must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of raw elements the buffer may hold before compaction.
    pub(crate) fn buffer_capacity(&self) -> usize {
        self.compaction.max(1).saturating_mul(self.size).max(1)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: 2,
            compaction: 2,
        }
    }
}

/// File configuration for file-backed sources
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub buffer_size: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}
