use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pipeline::Phase;

/// One-directional status signal from the worker to the foreground surface:
/// a single current-phase slot plus a finished flag. Only the latest phase is
/// meaningful, so there is no queue.
#[derive(Clone)]
pub struct ProgressSlot {
    inner: Arc<Inner>,
}

struct Inner {
    phase: Mutex<Phase>,
    finished: AtomicBool,
}

impl ProgressSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                phase: Mutex::new(Phase::Init),
                finished: AtomicBool::new(false),
            }),
        }
    }

    pub fn set(&self, phase: Phase) {
        if let Ok(mut slot) = self.inner.phase.lock() {
            *slot = phase;
        }
    }

    pub fn current(&self) -> Phase {
        self.inner
            .phase
            .lock()
            .map(|slot| *slot)
            .unwrap_or(Phase::Init)
    }

    /// Releases the foreground loop. Called exactly once, after the worker
    /// reaches a terminal state.
    pub fn finish(&self) {
        self.inner.finished.store(true, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.inner.finished.load(Ordering::Acquire)
    }
}

impl Default for ProgressSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks the slot finished when dropped, unwinds included, so the foreground
/// loop terminates even if the worker panics and the join can surface it.
pub struct FinishOnDrop(ProgressSlot);

impl FinishOnDrop {
    pub fn new(slot: ProgressSlot) -> Self {
        Self(slot)
    }
}

impl Drop for FinishOnDrop {
    fn drop(&mut self) {
        self.0.finish();
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
