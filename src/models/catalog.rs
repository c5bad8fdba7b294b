//! Course table.
//!
//! Owns every course (and through them every section) handed to the
//! scheduling core. Sections refer back to their course by code; the
//! catalog resolves that handle.

use std::collections::HashMap;

use super::{Course, Department, Section};
use crate::error::ScheduleError;

/// A set of courses keyed by unique code, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of courses.
    ///
    /// # Errors
    /// `DuplicateCourseCode` on the first repeated code.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Result<Self, ScheduleError> {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course)?;
        }
        Ok(catalog)
    }

    /// Adds a course.
    ///
    /// # Errors
    /// `DuplicateCourseCode` if a course with the same code exists.
    pub fn insert(&mut self, course: Course) -> Result<(), ScheduleError> {
        if self.index.contains_key(&course.code) {
            return Err(ScheduleError::DuplicateCourseCode { code: course.code });
        }
        self.index.insert(course.code.clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    /// Finds a course by code.
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&i| &self.courses[i])
    }

    /// Resolves a section's owning course.
    pub fn course_of(&self, section: &Section) -> Option<&Course> {
        self.course(&section.course_code)
    }

    /// Name of the course a section belongs to.
    pub fn section_name(&self, section: &Section) -> Option<&str> {
        self.course_of(section).map(|c| c.name.as_str())
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses offered by a department.
    pub fn by_department(&self, department: Department) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.department == department)
            .collect()
    }

    /// Every section of every course, flattened in catalog order.
    pub fn section_pool(&self) -> Vec<&Section> {
        self.courses.iter().flat_map(|c| c.sections.iter()).collect()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
