//! Run gate and observable progress
//!
//! Admits one run at a time and publishes its progress on a
//! `tokio::sync::watch` channel for the status endpoint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use icp_prompt::{ProgressSink, RunProgress};

pub struct RunGate {
    running: AtomicBool,
    progress: watch::Sender<RunProgress>,
}

impl RunGate {
    pub fn new() -> Self {
        let (progress, _) = watch::channel(RunProgress::idle());
        Self {
            running: AtomicBool::new(false),
            progress,
        }
    }

    /// Claim the gate. `None` while another run holds it.
    ///
    /// A successful claim is visible as `running` right away, before the
    /// request is resolved and planned.
    pub fn try_begin(self: &Arc<Self>) -> Option<RunGuard> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.progress.send_replace(RunProgress::starting(0));
        Some(RunGuard {
            gate: Arc::clone(self),
        })
    }

    pub fn snapshot(&self) -> RunProgress {
        self.progress.borrow().clone()
    }
}

impl Default for RunGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for RunGate {
    fn report(&self, progress: RunProgress) {
        self.progress.send_replace(progress);
    }
}

/// Releases the gate and resets progress to idle when dropped,
/// including when the run future is abandoned mid-way.
pub struct RunGuard {
    gate: Arc<RunGate>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.gate.progress.send_replace(RunProgress::idle());
        self.gate.running.store(false, Ordering::Release);
    }
}
