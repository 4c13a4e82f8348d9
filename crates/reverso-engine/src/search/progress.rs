//! Search progress shared with a polling thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe view of how far a search has run.
///
/// The search writes through a clone of this handle (see [`sink`](Self::sink)
/// or [`MctsSearcher::search_tracked`](crate::MctsSearcher::search_tracked))
/// while a foreground thread polls [`fraction`](Self::fraction), e.g. to
/// draw a progress bar. The search never reads it back and cannot be
/// cancelled through it.
#[derive(Debug, Clone, Default)]
pub struct SearchProgress {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    completed: AtomicU32,
    total: AtomicU32,
}

impl SearchProgress {
    /// Create a fresh handle reporting 0 of 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new search with the given budget.
    pub fn start(&self, total: u32) {
        self.inner.completed.store(0, Ordering::Relaxed);
        self.inner.total.store(total, Ordering::Release);
    }

    /// Record the number of completed iterations.
    pub fn record(&self, completed: u32) {
        self.inner.completed.fetch_max(completed, Ordering::AcqRel);
    }

    /// Iterations completed so far.
    pub fn completed(&self) -> u32 {
        self.inner.completed.load(Ordering::Acquire)
    }

    /// Completed fraction in `[0, 1]`; a zero budget counts as done.
    pub fn fraction(&self) -> f64 {
        let total = self.inner.total.load(Ordering::Acquire);
        fraction(self.completed(), total)
    }

    /// Return `true` once every iteration has been recorded.
    pub fn is_done(&self) -> bool {
        self.fraction() >= 1.0
    }

    /// Adapt this handle into a progress callback for [`MctsSearcher::search`](crate::MctsSearcher::search).
    ///
    /// The callback receives fractions, so the handle's budget must be set
    /// with [`start`](Self::start) first.
    pub fn sink(&self) -> impl FnMut(f64) + Send + use<> {
        let handle = self.clone();
        move |value| {
            let total = handle.inner.total.load(Ordering::Acquire);
            let done = (value.clamp(0.0, 1.0) * f64::from(total)).round() as u32;
            handle.record(done);
        }
    }
}

/// `completed / total`, capped at 1.0, with an empty budget reported as 1.0.
pub(crate) fn fraction(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (f64::from(completed) / f64::from(total)).min(1.0)
}
