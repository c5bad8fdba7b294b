//! Search configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default trial budget.
pub const DEFAULT_TRIAL_COUNT: u64 = 1_000_000;

/// Parameters of a randomized timetable search.
///
/// # Example
///
/// ```
/// use course_timetable::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_trial_count(10_000)
///     .with_seed(7)
///     .with_workers(4);
/// assert_eq!(config.trial_count, 10_000);
/// assert_eq!(config.random_seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of shuffled greedy trials. Always run in full unless stopped.
    pub trial_count: u64,
    /// Seed for reproducible runs. `None` draws one from the OS.
    pub random_seed: Option<u64>,
    /// Worker threads. Each gets its own random stream and share of trials.
    pub workers: usize,
    /// Also compute per-section conflict counts over the pool.
    pub compute_conflicts: bool,
    /// Wall-clock limit, checked between trials.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            random_seed: None,
            workers: 1,
            compute_conflicts: false,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// Creates a config with the given trial budget.
    pub fn new(trial_count: u64) -> Self {
        Self::default().with_trial_count(trial_count)
    }

    /// Sets the trial budget.
    pub fn with_trial_count(mut self, trial_count: u64) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of workers (at least one is always used).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Enables the conflict-count diagnostic.
    pub fn with_conflict_counts(mut self, enabled: bool) -> Self {
        self.compute_conflicts = enabled;
        self
    }

    /// Sets a wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Trials assigned to each worker; earlier workers take the remainder.
    pub fn trials_per_worker(&self) -> Vec<u64> {
        let workers = self.workers.max(1) as u64;
        let base = self.trial_count / workers;
        let extra = self.trial_count % workers;
        (0..workers).map(|w| base + u64::from(w < extra)).collect()
    }
}
