//! Randomized timetable search and result reporting.
//!
//! # Algorithm
//!
//! `RandomizedSearch` runs a fixed budget of shuffled greedy trials over
//! a read-only section pool and keeps the largest schedule. It is not
//! optimal, but cheap per trial and trivially parallel: each worker owns
//! its random stream, and results are merged once at the end.
//!
//! # Reproducibility
//!
//! With `random_seed` set, the same pool, seed, and worker count always
//! give the same result.
//!
//! # References
//!
//! - Luby (1986), "A simple parallel algorithm for the maximal independent set problem"
//! - Halldórsson & Radhakrishnan (1997), "Greed is good: approximating independent sets"

mod config;
mod driver;
mod report;

pub use config::{SearchConfig, DEFAULT_TRIAL_COUNT};
pub use driver::{
    sections_from_values, Improvement, RandomizedSearch, SearchOutcome, SearchState, StopHandle,
    TrialRunner,
};
pub use report::{ReportEntry, ScheduleReport};
