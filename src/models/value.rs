//! Tagged catalog values for loosely typed boundaries.
//!
//! Records arriving from an external collaborator (JSON dumps, mixed
//! lists) may carry any catalog kind. Converting into a concrete type
//! fails with `TypeMismatch` when the kind is wrong.

use serde::{Deserialize, Serialize};

use super::{Course, Section, WeeklyTimeSlot};
use crate::error::ScheduleError;

/// Any catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogValue {
    Course(Course),
    Section(Section),
    Slot(WeeklyTimeSlot),
}

impl CatalogValue {
    /// Name of the carried kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogValue::Course(_) => "course",
            CatalogValue::Section(_) => "section",
            CatalogValue::Slot(_) => "slot",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ScheduleError {
        ScheduleError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<Course> for CatalogValue {
    fn from(course: Course) -> Self {
        CatalogValue::Course(course)
    }
}

impl From<Section> for CatalogValue {
    fn from(section: Section) -> Self {
        CatalogValue::Section(section)
    }
}

impl From<WeeklyTimeSlot> for CatalogValue {
    fn from(slot: WeeklyTimeSlot) -> Self {
        CatalogValue::Slot(slot)
    }
}

impl TryFrom<CatalogValue> for Course {
    type Error = ScheduleError;

    fn try_from(value: CatalogValue) -> Result<Self, Self::Error> {
        match value {
            CatalogValue::Course(course) => Ok(course),
            other => Err(other.mismatch("course")),
        }
    }
}

impl TryFrom<CatalogValue> for Section {
    type Error = ScheduleError;

    fn try_from(value: CatalogValue) -> Result<Self, Self::Error> {
        match value {
            CatalogValue::Section(section) => Ok(section),
            other => Err(other.mismatch("section")),
        }
    }
}

impl TryFrom<CatalogValue> for WeeklyTimeSlot {
    type Error = ScheduleError;

    fn try_from(value: CatalogValue) -> Result<Self, Self::Error> {
        match value {
            CatalogValue::Slot(slot) => Ok(slot),
            other => Err(other.mismatch("slot")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Weekday};

    #[test]
    fn test_matching_kind_converts() {
        let section = Section::new("A", "X");
        let value = CatalogValue::from(section.clone());
        assert_eq!(Section::try_from(value).unwrap(), section);
    }

    #[test]
    fn test_wrong_kind_is_type_mismatch() {
        let value = CatalogValue::from(Course::new("X", "Course X", Department::Icmc));
        assert_eq!(
            Section::try_from(value.clone()),
            Err(ScheduleError::TypeMismatch {
                expected: "section",
                found: "course",
            })
        );
        assert!(WeeklyTimeSlot::try_from(value).is_err());

        let slot = CatalogValue::from(WeeklyTimeSlot::untimed(Weekday::Monday));
        assert!(matches!(
            Course::try_from(slot),
            Err(ScheduleError::TypeMismatch { expected: "course", found: "slot" })
        ));
    }

    #[test]
    fn test_tagged_json() {
        let value = CatalogValue::from(
            WeeklyTimeSlot::from_hm(Weekday::Tuesday, (8, 0), (10, 0)).unwrap(),
        );
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["kind"], "slot");
        assert_eq!(json["weekday"], "Tuesday");
        assert_eq!(json["start"], "08:00:00");

        let back: CatalogValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }
}
