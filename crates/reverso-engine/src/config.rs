//! Search configuration.

/// Default iteration budget per move.
pub const DEFAULT_ITERATIONS: u32 = 500;

/// Default number of iterations between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 10;

/// Default constant under the square root of the UCB exploration term.
pub const DEFAULT_EXPLORATION: f64 = 2.0;

/// Knobs for one [`MctsSearcher`](crate::MctsSearcher).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of select/expand/simulate/backpropagate cycles per search.
    pub iterations: u32,
    /// Report progress every this many iterations (0 behaves like 1).
    pub progress_interval: u32,
    /// `c` in `reward / n + sqrt(c * ln(N) / n)`.
    pub exploration: f64,
    /// Fixed RNG seed for reproducible searches; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Default configuration with the given iteration budget.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Return a copy using the given seed.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Progress interval clamped to at least one iteration.
    #[inline]
    pub(crate) fn report_every(&self) -> u32 {
        self.progress_interval.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            exploration: DEFAULT_EXPLORATION,
            seed: None,
        }
    }
}
