//! Progress reporting from a running crawl to its caller

use tokio::sync::watch;

/// Snapshot of crawl progress
///
/// `total` is `done` plus the current frontier size. It is a live estimate
/// that grows as links are discovered and shrinks as duplicates are skipped,
/// so it only becomes exact once the frontier is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub done: u64,
    pub total: u64,
}

impl ProgressState {
    pub fn new(done: u64, frontier_len: usize) -> Self {
        Self {
            done,
            total: done + frontier_len as u64,
        }
    }
}

/// Receives progress updates after each processed page
///
/// Implementations are called from the run's own task and must return
/// quickly without blocking I/O.
pub trait ProgressSink {
    fn report(&self, progress: ProgressState);
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressState),
{
    fn report(&self, progress: ProgressState) {
        self(progress)
    }
}

/// Publishes the latest snapshot to any number of concurrent pollers
impl ProgressSink for watch::Sender<ProgressState> {
    fn report(&self, progress: ProgressState) {
        self.send_replace(progress);
    }
}

/// Sink that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _progress: ProgressState) {}
}
