use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts disposable geometry copies handed out by a validator
#[derive(Debug, Default)]
pub struct ScratchTracker {
    live: AtomicUsize,
    total: AtomicUsize,
}

impl ScratchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `source` into a scratch buffer released when the guard drops
    pub fn acquire(&self, source: &[f32]) -> ScratchBuffer<'_> {
        self.live.fetch_add(1, Ordering::AcqRel);
        self.total.fetch_add(1, Ordering::Relaxed);
        ScratchBuffer {
            data: source.to_vec(),
            tracker: self,
        }
    }

    /// Copies currently alive
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    /// Copies ever acquired
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }
}

/// Disposable copy of a position buffer
pub struct ScratchBuffer<'t> {
    data: Vec<f32>,
    tracker: &'t ScratchTracker,
}

impl Deref for ScratchBuffer<'_> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.data
    }
}

impl Drop for ScratchBuffer<'_> {
    fn drop(&mut self) {
        self.tracker.live.fetch_sub(1, Ordering::AcqRel);
    }
}
