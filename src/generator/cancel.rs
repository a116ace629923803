//! Cooperative cancellation keyed by job id

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

/// A shared flag polled by the search loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Live jobs and their cancellation tokens
#[derive(Debug, Default)]
pub struct CancelRegistry {
    next_id: AtomicU64,
    tokens: Mutex<FxHashMap<JobId, CancelToken>>,
}

impl CancelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id and a fresh token for a new job
    pub fn register(&self) -> (JobId, CancelToken) {
        let id = JobId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let token = CancelToken::new();
        self.lock().insert(id, token.clone());
        log::debug!("registered {id}");
        (id, token)
    }

    /// Flag a job for cancellation; false if the id is unknown
    pub fn cancel(&self, id: JobId) -> bool {
        self.lock().get(&id).map(CancelToken::cancel).is_some()
    }

    /// Forget a finished job
    pub fn release(&self, id: JobId) {
        self.lock().remove(&id);
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock cannot leave the map half-updated
    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<JobId, CancelToken>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
