//! Catalog and timetable domain models.
//!
//! Provides the data types the timetable search runs over: weekly time
//! slots, sections, courses, the course table, and the schedule being
//! built.
//!
//! # Terminology
//!
//! | Model | Catalog term | Meaning |
//! |-------|--------------|---------|
//! | WeeklyTimeSlot | week lecture | One recurring weekly meeting |
//! | Section | class / turma | One offered instance of a course |
//! | Course | disciplina | Catalog entry owning sections |
//! | Schedule | grade | Conflict-free, one-per-course selection |

mod catalog;
mod course;
mod schedule;
mod section;
mod slot;
mod value;
mod weekday;

pub use catalog::Catalog;
pub use course::{Course, Department, Requirement};
pub use schedule::Schedule;
pub use section::Section;
pub use slot::WeeklyTimeSlot;
pub use value::CatalogValue;
pub use weekday::Weekday;
