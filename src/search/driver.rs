//! Randomized greedy search for a maximum timetable.
//!
//! # Algorithm
//!
//! 1. Shuffle the whole section pool (uniform permutation).
//! 2. Build an empty schedule and try every section in shuffled order,
//!    silently skipping those rejected as conflicts.
//! 3. Keep the result if it is strictly larger than the best so far.
//!
//! The full trial budget is always spent unless a stop is requested.
//! This is a Monte-Carlo approximation of a maximum independent set on
//! the conflict graph, with at most one node per course.
//!
//! # Complexity
//! O(t · n²) for t trials over n sections.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use super::SearchConfig;
use crate::conflict::conflict_counts;
use crate::error::ScheduleError;
use crate::models::{Catalog, CatalogValue, Schedule, Section};

/// Progress of a trial runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchState {
    /// Trials remain in the budget.
    Running,
    /// Budget exhausted or stopped.
    Done,
}

/// Cooperative stop flag, checked between trials.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop after the current trial.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A new best schedule found during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Improvement {
    /// Worker that found it.
    pub worker: usize,
    /// Trial number within that worker, starting at 1.
    pub trial: u64,
    /// Size of the new best schedule.
    pub size: usize,
}

/// Runs shuffled greedy trials one at a time over a fixed pool.
///
/// Owns its random stream and the best schedule seen so far.
#[derive(Debug)]
pub struct TrialRunner<'p, 'a> {
    pool: &'p [&'a Section],
    order: Vec<usize>,
    rng: SmallRng,
    budget: u64,
    trials_run: u64,
    worker: usize,
    best: Schedule<'a>,
    improvements: Vec<Improvement>,
}

impl<'p, 'a> TrialRunner<'p, 'a> {
    /// Creates a runner with a trial budget.
    pub fn new(pool: &'p [&'a Section], rng: SmallRng, budget: u64) -> Self {
        Self {
            pool,
            order: (0..pool.len()).collect(),
            rng,
            budget,
            trials_run: 0,
            worker: 0,
            best: Schedule::new(),
            improvements: Vec::new(),
        }
    }

    /// Tags reported improvements with a worker index.
    pub fn for_worker(mut self, worker: usize) -> Self {
        self.worker = worker;
        self
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        if self.trials_run < self.budget {
            SearchState::Running
        } else {
            SearchState::Done
        }
    }

    /// Runs one trial if budget remains, returning the state afterwards.
    ///
    /// # Errors
    /// Any non-conflict error from schedule insertion (malformed slot).
    pub fn step(&mut self) -> Result<SearchState, ScheduleError> {
        if self.state() == SearchState::Done {
            return Ok(SearchState::Done);
        }

        self.order.shuffle(&mut self.rng);
        let mut schedule = Schedule::new();
        for &i in &self.order {
            match schedule.add(self.pool[i]) {
                Ok(()) => {}
                Err(err) if err.is_conflict() => {}
                Err(err) => return Err(err),
            }
        }
        self.trials_run += 1;

        if schedule.len() > self.best.len() {
            info!(
                "New best schedule with {} sections (worker {}, trial {})",
                schedule.len(),
                self.worker,
                self.trials_run
            );
            self.improvements.push(Improvement {
                worker: self.worker,
                trial: self.trials_run,
                size: schedule.len(),
            });
            self.best = schedule;
        }

        Ok(self.state())
    }

    /// Steps until the budget is spent or `keep_going` returns false.
    pub fn run_while(
        &mut self,
        mut keep_going: impl FnMut() -> bool,
    ) -> Result<SearchState, ScheduleError> {
        while self.state() == SearchState::Running && keep_going() {
            self.step()?;
        }
        Ok(self.state())
    }

    /// Best schedule so far.
    pub fn best(&self) -> &Schedule<'a> {
        &self.best
    }

    /// Trials completed.
    pub fn trials_run(&self) -> u64 {
        self.trials_run
    }

    /// Improvements so far, in discovery order.
    pub fn improvements(&self) -> &[Improvement] {
        &self.improvements
    }

    fn finish(self) -> WorkerResult<'a> {
        WorkerResult {
            best: self.best,
            trials_run: self.trials_run,
            improvements: self.improvements,
        }
    }
}

struct WorkerResult<'a> {
    best: Schedule<'a>,
    trials_run: u64,
    improvements: Vec<Improvement>,
}

/// Result of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    /// Largest schedule found. Ties keep the earliest found.
    pub best: Schedule<'a>,
    /// Trials completed across all workers.
    pub trials_run: u64,
    /// Strictly increasing best sizes, in merge order.
    pub improvements: Vec<Improvement>,
    /// Seed the run used, for reproduction.
    pub seed: u64,
    /// Whether the run ended before spending the budget.
    pub stopped_early: bool,
    /// Per-section conflict counts, if requested.
    pub conflict_counts: Option<HashMap<String, usize>>,
}

impl SearchOutcome<'_> {
    /// Number of sections in the best schedule.
    pub fn size(&self) -> usize {
        self.best.len()
    }

    /// Weekly minutes of the best schedule.
    pub fn credits(&self) -> i64 {
        self.best.credits()
    }
}

/// Randomized best-of-N timetable search.
///
/// # Example
///
/// ```
/// use course_timetable::models::{Section, Weekday, WeeklyTimeSlot};
/// use course_timetable::search::{RandomizedSearch, SearchConfig};
///
/// let pool = vec![
///     Section::new("A", "X").with_slot(WeeklyTimeSlot::from_hm(Weekday::Monday, (8, 0), (10, 0)).unwrap()),
///     Section::new("B", "Y").with_slot(WeeklyTimeSlot::from_hm(Weekday::Monday, (9, 0), (11, 0)).unwrap()),
///     Section::new("C", "Z").with_slot(WeeklyTimeSlot::from_hm(Weekday::Tuesday, (8, 0), (10, 0)).unwrap()),
/// ];
/// let refs: Vec<&Section> = pool.iter().collect();
///
/// let search = RandomizedSearch::new(SearchConfig::new(100).with_seed(1));
/// let outcome = search.run(&refs).unwrap();
/// assert_eq!(outcome.size(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomizedSearch {
    config: SearchConfig,
    stop: StopHandle,
}

impl RandomizedSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stop: StopHandle::new(),
        }
    }

    /// Uses an externally owned stop flag.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// Flag that stops this search between trials.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches every section of every course in the catalog.
    pub fn run_catalog<'a>(&self, catalog: &'a Catalog) -> Result<SearchOutcome<'a>, ScheduleError> {
        let pool = catalog.section_pool();
        self.run(&pool)
    }

    /// Searches the given section pool.
    ///
    /// The pool is read-only for the duration of the search.
    ///
    /// # Errors
    /// `MalformedTimeSlot` if a trial compares an untimed slot. Scheduling
    /// conflicts are never surfaced.
    pub fn run<'a>(&self, pool: &[&'a Section]) -> Result<SearchOutcome<'a>, ScheduleError> {
        let seed = self
            .config
            .random_seed
            .unwrap_or_else(|| rand::rng().random());
        let budgets = self.config.trials_per_worker();
        let started = Instant::now();
        debug!(
            "Starting search: {} sections, {} trials, {} workers, seed {}",
            pool.len(),
            self.config.trial_count,
            budgets.len(),
            seed
        );

        let keep_going = || {
            !self.stop.is_stopped()
                && self
                    .config
                    .time_limit
                    .map_or(true, |limit| started.elapsed() < limit)
        };

        let results: Vec<WorkerResult<'a>> = if budgets.len() == 1 {
            let mut runner = TrialRunner::new(pool, SmallRng::seed_from_u64(seed), budgets[0]);
            runner.run_while(&keep_going)?;
            vec![runner.finish()]
        } else {
            budgets
                .par_iter()
                .enumerate()
                .map(|(worker, &budget)| -> Result<WorkerResult<'a>, ScheduleError> {
                    let rng = SmallRng::seed_from_u64(seed.wrapping_add(worker as u64));
                    let mut runner = TrialRunner::new(pool, rng, budget).for_worker(worker);
                    runner.run_while(&keep_going)?;
                    Ok(runner.finish())
                })
                .collect::<Result<Vec<_>, ScheduleError>>()?
        };

        let mut outcome = merge(results, seed);
        outcome.stopped_early = outcome.trials_run < self.config.trial_count;
        if self.config.compute_conflicts {
            outcome.conflict_counts = Some(conflict_counts(pool));
        }

        if outcome.stopped_early {
            debug!("Search stopped after {} trials", outcome.trials_run);
        }
        debug!(
            "Search finished: best size {}, credits {}, {:?} elapsed",
            outcome.size(),
            outcome.credits(),
            started.elapsed()
        );
        Ok(outcome)
    }
}

/// Reduces worker results in worker order; ties keep the earlier worker.
fn merge<'a>(results: Vec<WorkerResult<'a>>, seed: u64) -> SearchOutcome<'a> {
    let mut outcome = SearchOutcome {
        best: Schedule::new(),
        trials_run: 0,
        improvements: Vec::new(),
        seed,
        stopped_early: false,
        conflict_counts: None,
    };

    for result in results {
        outcome.trials_run += result.trials_run;
        for improvement in result.improvements {
            let last = outcome.improvements.last().map_or(0, |i| i.size);
            if improvement.size > last {
                outcome.improvements.push(improvement);
            }
        }
        if result.best.len() > outcome.best.len() {
            outcome.best = result.best;
        }
    }
    outcome
}

/// Converts loosely typed catalog values into a section pool.
///
/// # Errors
/// `TypeMismatch` on the first value that is not a section.
pub fn sections_from_values(
    values: impl IntoIterator<Item = CatalogValue>,
) -> Result<Vec<Section>, ScheduleError> {
    values.into_iter().map(Section::try_from).collect()
}
