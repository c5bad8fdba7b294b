//! Course catalog models and timetable search.
//!
//! Finds a large conflict-free set of class sections (a timetable) a
//! student could enroll in: at most one section per course, no two
//! sections meeting at the same time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WeeklyTimeSlot`, `Section`, `Course`,
//!   `Catalog`, `Schedule`
//! - **`conflict`**: Pairwise overlap predicate and conflict counts
//! - **`search`**: Randomized best-of-N search, configuration, reports
//! - **`ingest`**: Building sections from extracted catalog table rows
//! - **`validation`**: Input integrity checks (duplicate codes, untimed slots)
//! - **`error`**: Error types
//!
//! # Architecture
//!
//! Fetching catalog pages is left to the caller. This crate starts from
//! in-memory rows or records and performs no I/O.
//!
//! # Example
//!
//! ```
//! use course_timetable::models::{Catalog, Course, Department, Section, Weekday, WeeklyTimeSlot};
//! use course_timetable::search::{RandomizedSearch, SearchConfig};
//!
//! let slot = |day, start, end| WeeklyTimeSlot::from_hm(day, (start, 0), (end, 0)).unwrap();
//! let catalog = Catalog::from_courses(vec![
//!     Course::new("X", "Algorithms", Department::Icmc)
//!         .with_section(Section::new("1", "").with_slot(slot(Weekday::Monday, 8, 10))),
//!     Course::new("Y", "Physics", Department::Ifsc)
//!         .with_section(Section::new("1", "").with_slot(slot(Weekday::Monday, 9, 11)))
//!         .with_section(Section::new("2", "").with_slot(slot(Weekday::Friday, 9, 11))),
//! ])
//! .unwrap();
//!
//! let outcome = RandomizedSearch::new(SearchConfig::new(100).with_seed(7))
//!     .run_catalog(&catalog)
//!     .unwrap();
//! assert_eq!(outcome.size(), 2);
//! ```

pub mod conflict;
pub mod error;
pub mod ingest;
pub mod models;
pub mod search;
pub mod validation;

pub use error::{IngestError, ScheduleError};
