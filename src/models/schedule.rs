//! Schedule (timetable) model.
//!
//! A schedule is an incrementally built, conflict-free selection of
//! sections. Every insertion is checked, so the committed state always
//! satisfies:
//! - No two accepted sections overlap.
//! - No two accepted sections belong to the same course.

use serde::Serialize;

use super::Section;
use crate::error::ScheduleError;

/// A conflict-free, one-section-per-course selection.
///
/// Holds borrowed sections; the pool they come from outlives the schedule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule<'a> {
    /// Accepted sections, in insertion order.
    sections: Vec<&'a Section>,
}

impl<'a> Schedule<'a> {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to accept a section.
    ///
    /// Checks run in two passes and the first failure wins:
    /// 1. Overlap against every accepted section except an identical one.
    /// 2. Same course as, or identical to, an accepted section.
    ///
    /// A rejected call leaves the schedule untouched.
    ///
    /// # Errors
    /// - `AlreadyOccupied` if the section overlaps an accepted one.
    /// - `DuplicateCourseEnrollment` if its course is already represented.
    /// - `MalformedTimeSlot` if a comparison hits an untimed slot.
    pub fn add(&mut self, section: &'a Section) -> Result<(), ScheduleError> {
        for accepted in &self.sections {
            if **accepted != *section && accepted.overlaps(section)? {
                return Err(ScheduleError::AlreadyOccupied {
                    candidate: section.code.clone(),
                    occupant: accepted.code.clone(),
                });
            }
        }

        if let Some(accepted) = self
            .sections
            .iter()
            .find(|a| a.course_code == section.course_code || **a == section)
        {
            return Err(ScheduleError::DuplicateCourseEnrollment {
                candidate: section.code.clone(),
                course: accepted.course_code.clone(),
            });
        }

        self.sections.push(section);
        Ok(())
    }

    /// Accepted sections, in insertion order.
    pub fn sections(&self) -> &[&'a Section] {
        &self.sections
    }

    /// Number of accepted sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section has been accepted.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total weekly minutes of the accepted sections.
    ///
    /// Sections with an unknown duration contribute nothing.
    pub fn credits(&self) -> i64 {
        self.sections.iter().filter_map(|s| s.duration()).sum()
    }

    /// Whether a section of the given course is accepted.
    pub fn contains_course(&self, course_code: &str) -> bool {
        self.sections.iter().any(|s| s.course_code == course_code)
    }

    /// Course codes of the accepted sections, in insertion order.
    pub fn course_codes(&self) -> Vec<&'a str> {
        self.sections.iter().map(|s| s.course_code.as_str()).collect()
    }
}
