//! Timetable summary.
//!
//! Turns a schedule into a serializable report for the driver program
//! that prints or stores search results.
//!
//! # Fields
//!
//! | Field | Definition |
//! |-------|-----------|
//! | size | Accepted sections |
//! | credits | Sum of weekly minutes of accepted sections |
//! | minutes_by_weekday | Weekly minutes spent in class per day |
//! | entries | One row per accepted section |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Catalog, Schedule, Weekday};

/// One accepted section as shown in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub section_code: String,
    pub course_code: String,
    /// Course title, when a catalog was supplied.
    pub course_name: Option<String>,
    pub professor: String,
    /// Slots rendered as `Day: HH:MM -> HH:MM`.
    pub slots: Vec<String>,
}

/// Summary of a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    pub size: usize,
    pub credits: i64,
    pub minutes_by_weekday: BTreeMap<Weekday, i64>,
    pub entries: Vec<ReportEntry>,
}

impl ScheduleReport {
    /// Builds a report, resolving course names through `catalog` if given.
    pub fn from_schedule(schedule: &Schedule<'_>, catalog: Option<&Catalog>) -> Self {
        let mut minutes_by_weekday = BTreeMap::new();
        let mut entries = Vec::with_capacity(schedule.len());

        for section in schedule.sections() {
            for slot in &section.slots {
                if let Some(minutes) = slot.duration_minutes() {
                    *minutes_by_weekday.entry(slot.weekday).or_insert(0) += minutes;
                }
            }
            entries.push(ReportEntry {
                section_code: section.code.clone(),
                course_code: section.course_code.clone(),
                course_name: catalog
                    .and_then(|c| c.section_name(section))
                    .map(str::to_string),
                professor: section.professor.clone(),
                slots: section.slots.iter().map(ToString::to_string).collect(),
            });
        }

        Self {
            size: schedule.len(),
            credits: schedule.credits(),
            minutes_by_weekday,
            entries,
        }
    }

    /// Day with the most class time. Earlier days win ties.
    pub fn busiest_day(&self) -> Option<(Weekday, i64)> {
        self.minutes_by_weekday
            .iter()
            .map(|(&d, &m)| (d, m))
            .fold(None, |best, (d, m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((d, m)),
            })
    }

    /// Days without any class.
    pub fn free_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| !self.minutes_by_weekday.contains_key(d))
            .collect()
    }
}
