//! Attempt progress reporting

/// Receives attempt counts as a search advances
///
/// Only the thread driving the search calls the sink; workers send counts to
/// it over a channel.
pub trait ProgressSink {
    /// `attempts` more attempts have finished
    fn advance(&self, attempts: u64);

    /// The search has stopped
    fn finish(&self) {}
}

/// Discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn advance(&self, _attempts: u64) {}
}

/// Counts attempts; handy for tests and summaries
#[derive(Debug, Default)]
pub struct CountingProgress {
    seen: std::sync::atomic::AtomicU64,
}

impl CountingProgress {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.seen.load(std::sync::atomic::Ordering::Relaxed)
    }
}

impl ProgressSink for CountingProgress {
    fn advance(&self, attempts: u64) {
        self.seen
            .fetch_add(attempts, std::sync::atomic::Ordering::Relaxed);
    }
}

impl ProgressSink for indicatif::ProgressBar {
    fn advance(&self, attempts: u64) {
        self.inc(attempts);
    }

    fn finish(&self) {
        self.finish_and_clear();
    }
}
