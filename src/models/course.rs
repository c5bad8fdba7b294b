//! Course (catalog entry) model.
//!
//! A course owns its sections and carries informational prerequisites.
//! Courses are immutable once handed to the scheduling core, apart from
//! the initial population of their section list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Section;

/// Teaching department, identified by its catalog unit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Instituto de Ciências Matemáticas e de Computação.
    Icmc,
    /// Escola de Engenharia de São Carlos.
    Eesc,
    /// Instituto de Física de São Carlos.
    Ifsc,
    /// Instituto de Química de São Carlos.
    Iqsc,
    /// Instituto de Arquitetura e Urbanismo.
    Iau,
}

impl Department {
    /// All known departments.
    pub const ALL: [Department; 5] = [
        Department::Icmc,
        Department::Eesc,
        Department::Ifsc,
        Department::Iqsc,
        Department::Iau,
    ];

    /// Catalog unit code.
    pub fn code(self) -> u16 {
        match self {
            Department::Icmc => 55,
            Department::Eesc => 18,
            Department::Ifsc => 76,
            Department::Iqsc => 75,
            Department::Iau => 99,
        }
    }

    /// Looks up a department by unit code.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Upper-case acronym.
    pub fn acronym(self) -> &'static str {
        match self {
            Department::Icmc => "ICMC",
            Department::Eesc => "EESC",
            Department::Ifsc => "IFSC",
            Department::Iqsc => "IQSC",
            Department::Iau => "IAU",
        }
    }

    /// Looks up a department by acronym, case-insensitive.
    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.acronym().eq_ignore_ascii_case(acronym.trim()))
    }
}

/// A prerequisite listed for a course. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Required course (code and name as printed by the catalog).
    pub name: String,
    /// Requirement kind, e.g. "Requisito fraco".
    pub requirement_type: String,
}

impl Requirement {
    /// Creates a requirement.
    pub fn new(name: impl Into<String>, requirement_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement_type: requirement_type.into(),
        }
    }
}

/// A catalog course.
///
/// Two courses are equal iff every field, section list included, is equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable course code, unique across the catalog.
    pub code: String,
    /// Course title.
    pub name: String,
    /// Offering department.
    pub department: Department,
    /// Offered sections, in catalog order.
    pub sections: Vec<Section>,
    /// Listed prerequisites.
    pub requirements: Vec<Requirement>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(code: impl Into<String>, name: impl Into<String>, department: Department) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            department,
            sections: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Adds a section, pointing its course reference at this course.
    pub fn with_section(mut self, section: Section) -> Self {
        self.push_section(section);
        self
    }

    /// Adds a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Appends a section, pointing its course reference at this course.
    pub fn push_section(&mut self, mut section: Section) {
        section.course_code = self.code.clone();
        self.sections.push(section);
    }

    /// Professor of each section, in section order.
    pub fn professors(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.professor.as_str()).collect()
    }

    /// Weekly duration of the first section, in minutes.
    ///
    /// Sections of a course usually share a load, so the first one stands
    /// in for the course. `None` if there are no sections or the first
    /// one has an untimed slot.
    pub fn duration(&self) -> Option<i64> {
        self.sections.first()?.duration()
    }

    /// Finds a section by code.
    pub fn section(&self, code: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.code == code)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether the course has any sections.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = self.sections.len();
        let requirements = self.requirements.len();
        write!(
            f,
            "{} - {} - {} section{} - {} requirement{}",
            self.code,
            self.name,
            sections,
            if sections == 1 { "" } else { "s" },
            requirements,
            if requirements == 1 { "" } else { "s" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Weekday, WeeklyTimeSlot};

    fn sample_course() -> Course {
        Course::new("SCC0201", "Introdução à Ciência de Computação II", Department::Icmc)
            .with_section(
                Section::new("101", "ignored")
                    .with_professor("Ana")
                    .with_slot(WeeklyTimeSlot::from_hm(Weekday::Monday, (8, 0), (10, 0)).unwrap())
                    .with_slot(WeeklyTimeSlot::from_hm(Weekday::Wednesday, (8, 0), (10, 0)).unwrap()),
            )
            .with_section(
                Section::new("102", "ignored")
                    .with_professor("Bruno")
                    .with_slot(WeeklyTimeSlot::from_hm(Weekday::Tuesday, (14, 0), (15, 40)).unwrap()),
            )
            .with_requirement(Requirement::new("SCC0221", "Requisito"))
    }

    #[test]
    fn test_department_table() {
        assert_eq!(Department::Icmc.code(), 55);
        assert_eq!(Department::from_code(18), Some(Department::Eesc));
        assert_eq!(Department::from_code(1), None);
        assert_eq!(Department::from_acronym("iqsc"), Some(Department::Iqsc));
        for d in Department::ALL {
            assert_eq!(Department::from_code(d.code()), Some(d));
        }
    }

    #[test]
    fn test_sections_point_at_course() {
        let course = sample_course();
        assert!(course.sections.iter().all(|s| s.course_code == "SCC0201"));
        assert_eq!(course.section_count(), 2);
        assert!(course.has_sections());
        assert_eq!(course.section("102").map(|s| s.professor.as_str()), Some("Bruno"));
    }

    #[test]
    fn test_professors() {
        assert_eq!(sample_course().professors(), vec!["Ana", "Bruno"]);
    }

    #[test]
    fn test_duration_uses_first_section() {
        let course = sample_course();
        assert_eq!(course.duration(), Some(240));

        let empty = Course::new("X", "Empty", Department::Iau);
        assert_eq!(empty.duration(), None);
    }

    #[test]
    fn test_equality_includes_sections() {
        let a = sample_course();
        let mut b = sample_course();
        assert_eq!(a, b);

        b.sections[1].professor = "Carla".into();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let s = sample_course().to_string();
        assert!(s.contains("SCC0201"));
        assert!(s.contains("2 sections"));
        assert!(s.contains("1 requirement"));
    }
}
