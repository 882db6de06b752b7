//! Progress Sink Port
//!
//! Receives the run's position before each domain is processed.

use crate::domain::RunProgress;

pub trait ProgressSink: Send + Sync {
    fn report(&self, progress: RunProgress);
}

/// Discards progress updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _progress: RunProgress) {}
}
