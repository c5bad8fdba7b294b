//! Input validation for timetable searches.
//!
//! Checks structural integrity of courses and sections before the search
//! runs. Detects:
//! - Duplicate course codes
//! - Duplicate section codes within a course
//! - Sections pointing at a different course
//! - Courses without sections, sections without slots
//! - Slots with missing or inverted times

use crate::models::Course;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same code.
    DuplicateCode,
    /// A course has no sections.
    EmptyCourse,
    /// A section has no weekly slots.
    EmptySection,
    /// A section's course reference does not match its owner.
    InvalidCourseReference,
    /// A slot lacks a start or end time.
    IncompleteSlot,
    /// A slot starts at or after its end.
    InvertedSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates courses before handing their sections to the search.
///
/// Checks:
/// 1. No duplicate course codes
/// 2. No duplicate section codes within a course
/// 3. Every course has at least one section
/// 4. Every section refers back to its owning course
/// 5. Every section has at least one slot
/// 6. Every slot has both times, with start before end
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut course_codes = HashSet::new();

    for course in courses {
        if !course_codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if course.sections.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no sections", course.code),
            ));
        }

        let mut section_codes = HashSet::new();
        for section in &course.sections {
            if !section_codes.insert(section.code.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCode,
                    format!(
                        "Duplicate section code '{}' in course '{}'",
                        section.code, course.code
                    ),
                ));
            }

            if section.course_code != course.code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCourseReference,
                    format!(
                        "Section '{}' of course '{}' refers to course '{}'",
                        section.code, course.code, section.course_code
                    ),
                ));
            }

            if section.slots.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySection,
                    format!("Section '{}' of course '{}' has no slots", section.code, course.code),
                ));
            }

            for slot in &section.slots {
                match slot.times() {
                    None => errors.push(ValidationError::new(
                        ValidationErrorKind::IncompleteSlot,
                        format!(
                            "Section '{}' of course '{}' has an untimed slot on {}",
                            section.code, course.code, slot.weekday
                        ),
                    )),
                    Some((start, end)) if start >= end => errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedSlot,
                        format!("Section '{}' of course '{}' has slot {slot}", section.code, course.code),
                    )),
                    Some(_) => {}
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
