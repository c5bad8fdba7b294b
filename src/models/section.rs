//! Section (class) model.
//!
//! A section is one offered instance of a course in a term, with its own
//! professor and weekly meeting slots.
//!
//! # Course Reference
//! A section refers to its owning course by code only. The code is a
//! handle into [`Catalog`](super::Catalog); the section never owns or
//! keeps alive the course record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeeklyTimeSlot;
use crate::error::ScheduleError;

/// One offered instance of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Section code, unique within its course.
    pub code: String,
    /// Code of the owning course.
    pub course_code: String,
    /// Professor name.
    pub professor: String,
    /// First day of the term.
    pub start_date: Option<NaiveDate>,
    /// Last day of the term.
    pub end_date: Option<NaiveDate>,
    /// Free-text remarks from the catalog.
    pub observation: String,
    /// Weekly meetings, in catalog order.
    pub slots: Vec<WeeklyTimeSlot>,
    /// Catalog page the section was read from.
    pub url: Option<String>,
}

impl Section {
    /// Creates a section with no slots.
    pub fn new(code: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            course_code: course_code.into(),
            professor: String::new(),
            start_date: None,
            end_date: None,
            observation: String::new(),
            slots: Vec::new(),
            url: None,
        }
    }

    /// Sets the professor.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }

    /// Sets the term dates.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the observation text.
    pub fn with_observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = observation.into();
        self
    }

    /// Sets the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds a weekly slot.
    pub fn with_slot(mut self, slot: WeeklyTimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Total weekly meeting time in minutes.
    ///
    /// `None` if any slot lacks a start or end time.
    pub fn duration(&self) -> Option<i64> {
        self.slots.iter().map(WeeklyTimeSlot::duration_minutes).sum()
    }

    /// Whether any slot of this section overlaps any slot of `other`.
    ///
    /// # Errors
    /// `MalformedTimeSlot` if a same-day pair is compared and either slot
    /// lacks a time.
    pub fn overlaps(&self, other: &Section) -> Result<bool, ScheduleError> {
        for theirs in &other.slots {
            for ours in &self.slots {
                match ours.overlaps(theirs) {
                    Some(true) => return Ok(true),
                    Some(false) => {}
                    None => {
                        let section = if ours.is_complete() { other } else { self };
                        return Err(ScheduleError::MalformedTimeSlot {
                            section: section.code.clone(),
                            weekday: ours.weekday,
                        });
                    }
                }
            }
        }
        Ok(false)
    }

    /// Whether every slot has both times present.
    pub fn is_time_complete(&self) -> bool {
        self.slots.iter().all(WeeklyTimeSlot::is_complete)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.slots.iter().map(ToString::to_string).collect();
        write!(f, "{} - {} - {}", self.code, self.professor, slots.join(", "))
    }
}
