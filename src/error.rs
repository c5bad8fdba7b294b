//! Error types for timetable construction and catalog ingestion.

use thiserror::Error;

use crate::models::Weekday;

/// Errors raised by the scheduling core.
///
/// `AlreadyOccupied` and `DuplicateCourseEnrollment` are expected outcomes
/// of greedy insertion and are recovered from by the search. The other
/// kinds signal a data-model invariant violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A compared slot lacks a start or end time.
    #[error("Malformed time slot in section '{section}' on {weekday}: missing start or end time")]
    MalformedTimeSlot { section: String, weekday: Weekday },

    /// The candidate section's time conflicts with an accepted section.
    #[error("Section '{candidate}' overlaps already accepted section '{occupant}'")]
    AlreadyOccupied { candidate: String, occupant: String },

    /// The candidate duplicates a course (or an identical section) already accepted.
    #[error("Section '{candidate}' duplicates an enrollment in course '{course}'")]
    DuplicateCourseEnrollment { candidate: String, course: String },

    /// A value of the wrong kind reached an API boundary.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A course with the same code is already in the catalog.
    #[error("Duplicate course code: {code}")]
    DuplicateCourseCode { code: String },
}

impl ScheduleError {
    /// Returns true for the scheduling conflicts the search skips over.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ScheduleError::AlreadyOccupied { .. } | ScheduleError::DuplicateCourseEnrollment { .. }
        )
    }

    /// Returns true if this error must abort a search trial.
    pub fn is_fatal(&self) -> bool {
        !self.is_conflict()
    }
}

/// Errors raised while building sections from extracted table rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Weekday cell is not one of the known abbreviations.
    #[error("Unknown weekday abbreviation: '{value}'")]
    UnknownWeekday { value: String },

    /// First schedule row of a section has a blank weekday cell.
    #[error("Schedule row {row} has no weekday and no previous row to inherit from")]
    MissingWeekday { row: usize },

    /// Time cell is not `HH:MM`.
    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// Date cell is not `dd/mm/yyyy`.
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Start time is not before end time.
    #[error("Inverted time range {start} -> {end}")]
    InvertedTimeRange { start: String, end: String },

    /// Detail table is missing a required row.
    #[error("Section detail table has {found} rows, expected {expected}")]
    MissingDetail { expected: usize, found: usize },

    /// Detail and schedule tables do not pair up one-to-one.
    #[error("Course '{course}': {details} detail tables but {schedules} schedule tables")]
    RowCountMismatch {
        course: String,
        details: usize,
        schedules: usize,
    },

    /// The course table already holds a course with this code.
    #[error("Duplicate course code: {code}")]
    DuplicateCourse { code: String },

    /// The course table refused the record for another reason.
    #[error("Catalog rejected record: {reason}")]
    Rejected { reason: String },
}

impl From<ScheduleError> for IngestError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::DuplicateCourseCode { code } => IngestError::DuplicateCourse { code },
            other => IngestError::Rejected {
                reason: other.to_string(),
            },
        }
    }
}
