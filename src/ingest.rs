//! Building catalog records from extracted table rows.
//!
//! The catalog collaborator fetches pages and pulls the cell text out of
//! their tables. This module turns those rows into [`Section`] and
//! [`Course`] records. It performs no I/O.
//!
//! # Table Shapes
//!
//! | Table | Columns | Content |
//! |-------|---------|---------|
//! | Section detail | 2 (label, value) | code, start date, end date, ..., observation |
//! | Section schedule | 4 | weekday, start, end, professor |
//! | Requirements | 2 | required course, requirement type |
//! | Department listing | 4 | code, name, ... |
//!
//! # Weekday Continuation
//! A schedule row with a blank weekday cell meets on the same day as the
//! row above it. See [`carry_forward_weekdays`].

use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::IngestError;
use crate::models::{Catalog, Course, Department, Requirement, Section, Weekday, WeeklyTimeSlot};

/// Number of rows in a section detail table.
pub const DETAIL_ROWS: usize = 5;

/// One row of a section schedule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Weekday abbreviation, blank to inherit the previous row's day.
    pub weekday: String,
    /// Start time `HH:MM`, possibly blank.
    pub start: String,
    /// End time `HH:MM`, possibly blank.
    pub end: String,
    /// Professor name.
    pub professor: String,
}

impl ScheduleRow {
    /// Creates a row from its four cells.
    pub fn new(
        weekday: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        professor: impl Into<String>,
    ) -> Self {
        Self {
            weekday: weekday.into(),
            start: start.into(),
            end: end.into(),
            professor: professor.into(),
        }
    }
}

/// Fields read from a section detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDetails {
    pub code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub observation: String,
}

impl SectionDetails {
    /// Reads the (label, value) rows of a detail table.
    ///
    /// Row 0 holds the code, rows 1 and 2 the term dates, and the last
    /// row the observation.
    pub fn from_rows(rows: &[(String, String)]) -> Result<Self, IngestError> {
        if rows.len() != DETAIL_ROWS {
            return Err(IngestError::MissingDetail {
                expected: DETAIL_ROWS,
                found: rows.len(),
            });
        }
        Ok(Self {
            code: rows[0].1.clone(),
            start_date: parse_date(&rows[1].1)?,
            end_date: parse_date(&rows[2].1)?,
            observation: rows[DETAIL_ROWS - 1].1.clone(),
        })
    }
}

/// Parses a catalog time of day (`HH:MM`).
pub fn parse_time(value: &str) -> Result<NaiveTime, IngestError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| IngestError::InvalidTime {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a catalog date (`dd/mm/yyyy`).
pub fn parse_date(value: &str) -> Result<NaiveDate, IngestError> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").map_err(|e| IngestError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_optional_time(value: &str) -> Result<Option<NaiveTime>, IngestError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_time(value).map(Some)
    }
}

/// Builds the weekly slots of one section from its schedule rows.
///
/// Folds over the rows carrying the last non-blank weekday forward, so a
/// blank weekday cell means "same day as the previous row". Blank time
/// cells become absent times.
///
/// # Errors
/// - `MissingWeekday` if the first row has a blank weekday.
/// - `UnknownWeekday`, `InvalidTime` for unparseable cells.
/// - `InvertedTimeRange` if a row's start is not before its end.
pub fn carry_forward_weekdays(rows: &[ScheduleRow]) -> Result<Vec<WeeklyTimeSlot>, IngestError> {
    let (_, slots) = rows.iter().enumerate().try_fold(
        (None, Vec::with_capacity(rows.len())),
        |(last, mut slots): (Option<Weekday>, Vec<WeeklyTimeSlot>),
         (i, row)|
         -> Result<(Option<Weekday>, Vec<WeeklyTimeSlot>), IngestError> {
            let cell = row.weekday.trim();
            let weekday = if cell.is_empty() {
                last.ok_or(IngestError::MissingWeekday { row: i })?
            } else {
                Weekday::from_abbreviation(cell).ok_or_else(|| IngestError::UnknownWeekday {
                    value: cell.to_string(),
                })?
            };

            let start = parse_optional_time(&row.start)?;
            let end = parse_optional_time(&row.end)?;
            if let (Some(s), Some(e)) = (start, end) {
                if s >= e {
                    return Err(IngestError::InvertedTimeRange {
                        start: row.start.clone(),
                        end: row.end.clone(),
                    });
                }
            }

            slots.push(WeeklyTimeSlot {
                weekday,
                start,
                end,
            });
            Ok((Some(weekday), slots))
        },
    )?;
    Ok(slots)
}

/// Pairs detail and schedule tables into sections of one course.
///
/// The n-th detail table describes the n-th schedule table. The section's
/// professor is taken from the first schedule row.
///
/// # Errors
/// `RowCountMismatch` if the table counts differ; any row-level error.
pub fn build_sections(
    course_code: &str,
    url: Option<&str>,
    details: &[Vec<(String, String)>],
    schedules: &[Vec<ScheduleRow>],
) -> Result<Vec<Section>, IngestError> {
    if details.len() != schedules.len() {
        return Err(IngestError::RowCountMismatch {
            course: course_code.to_string(),
            details: details.len(),
            schedules: schedules.len(),
        });
    }

    details
        .iter()
        .zip(schedules)
        .map(|(detail_rows, schedule_rows)| -> Result<Section, IngestError> {
            let detail = SectionDetails::from_rows(detail_rows)?;
            let professor = schedule_rows
                .first()
                .map(|r| r.professor.clone())
                .unwrap_or_default();

            let mut section = Section::new(detail.code, course_code)
                .with_professor(professor)
                .with_dates(detail.start_date, detail.end_date)
                .with_observation(detail.observation);
            if let Some(url) = url {
                section = section.with_url(url);
            }
            section.slots = carry_forward_weekdays(schedule_rows)?;
            Ok(section)
        })
        .collect()
}

/// Reads requirement rows, ignoring rows with a blank name.
pub fn parse_requirements(rows: &[(String, String)]) -> Vec<Requirement> {
    rows.iter()
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, kind)| Requirement::new(name.trim(), kind.trim()))
        .collect()
}

/// Creates a course from a department listing row (code, name, ...).
///
/// Returns `None` for rows with fewer than two cells or a blank code.
pub fn course_from_listing_row(row: &[String], department: Department) -> Option<Course> {
    let code = row.first()?.trim();
    let name = row.get(1)?.trim();
    if code.is_empty() {
        return None;
    }
    Some(Course::new(code, name, department))
}

/// Options for [`ingest_course`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Leave out courses that end up with no sections.
    pub skip_courses_without_sections: bool,
}

/// Populates a course's sections and adds it to the catalog.
///
/// A course whose detail and schedule table counts differ is skipped
/// with a warning rather than failing the whole ingestion.
///
/// # Returns
/// `Ok(true)` if the course was inserted, `Ok(false)` if it was skipped.
///
/// # Errors
/// Row-level parse errors, or a duplicate course code.
pub fn ingest_course(
    catalog: &mut Catalog,
    mut course: Course,
    url: Option<&str>,
    details: &[Vec<(String, String)>],
    schedules: &[Vec<ScheduleRow>],
    options: IngestOptions,
) -> Result<bool, IngestError> {
    let sections = match build_sections(&course.code, url, details, schedules) {
        Ok(sections) => sections,
        Err(err @ IngestError::RowCountMismatch { .. }) => {
            warn!("Skipping course {}: {err}", course.code);
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    if sections.is_empty() && options.skip_courses_without_sections {
        debug!("Skipping course {}: no sections", course.code);
        return Ok(false);
    }

    for section in sections {
        course.push_section(section);
    }
    catalog.insert(course)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_rows(code: &str) -> Vec<(String, String)> {
        vec![
            ("Código da Turma".into(), code.into()),
            ("Início".into(), "26/02/2024".into()),
            ("Fim".into(), "06/07/2024".into()),
            ("Tipo da Turma".into(), "Teórica".into()),
            ("Observações".into(), "Turma 1".into()),
        ]
    }

    fn slot(day: Weekday, start: (u32, u32), end: (u32, u32)) -> WeeklyTimeSlot {
        WeeklyTimeSlot::from_hm(day, start, end).unwrap()
    }

    #[test]
    fn test_parse_time_and_date() {
        assert_eq!(parse_time("08:10").unwrap(), NaiveTime::from_hms_opt(8, 10, 0).unwrap());
        assert!(matches!(parse_time("8h10"), Err(IngestError::InvalidTime { .. })));
        assert_eq!(
            parse_date("06/07/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 6).unwrap()
        );
        assert!(matches!(parse_date("2024-07-06"), Err(IngestError::InvalidDate { .. })));
    }

    #[test]
    fn test_carry_forward_weekdays() {
        let rows = vec![
            ScheduleRow::new("seg", "08:10", "09:50", "Ana"),
            ScheduleRow::new("", "10:10", "11:50", "Ana"),
            ScheduleRow::new("qua", "14:20", "16:00", "Ana"),
            ScheduleRow::new("", "16:20", "18:00", "Ana"),
            ScheduleRow::new(" ", "19:00", "20:40", "Ana"),
        ];
        let slots = carry_forward_weekdays(&rows).unwrap();
        assert_eq!(
            slots,
            vec![
                slot(Weekday::Monday, (8, 10), (9, 50)),
                slot(Weekday::Monday, (10, 10), (11, 50)),
                slot(Weekday::Wednesday, (14, 20), (16, 0)),
                slot(Weekday::Wednesday, (16, 20), (18, 0)),
                slot(Weekday::Wednesday, (19, 0), (20, 40)),
            ]
        );
    }

    #[test]
    fn test_carry_forward_needs_a_first_weekday() {
        let rows = vec![ScheduleRow::new("", "08:00", "10:00", "Ana")];
        assert_eq!(
            carry_forward_weekdays(&rows),
            Err(IngestError::MissingWeekday { row: 0 })
        );
    }

    #[test]
    fn test_carry_forward_blank_times() {
        let rows = vec![ScheduleRow::new("sex", "", "", "")];
        let slots = carry_forward_weekdays(&rows).unwrap();
        assert_eq!(slots, vec![WeeklyTimeSlot::untimed(Weekday::Friday)]);
    }

    #[test]
    fn test_carry_forward_rejects_bad_rows() {
        let unknown = vec![ScheduleRow::new("dom", "08:00", "10:00", "")];
        assert!(matches!(
            carry_forward_weekdays(&unknown),
            Err(IngestError::UnknownWeekday { .. })
        ));

        let inverted = vec![ScheduleRow::new("seg", "10:00", "08:00", "")];
        assert!(matches!(
            carry_forward_weekdays(&inverted),
            Err(IngestError::InvertedTimeRange { .. })
        ));
    }

    #[test]
    fn test_section_details() {
        let d = SectionDetails::from_rows(&detail_rows("2024101")).unwrap();
        assert_eq!(d.code, "2024101");
        assert_eq!(d.start_date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(d.observation, "Turma 1");

        let short = &detail_rows("x")[..3];
        assert_eq!(
            SectionDetails::from_rows(short),
            Err(IngestError::MissingDetail {
                expected: 5,
                found: 3,
            })
        );
    }

    #[test]
    fn test_build_sections() {
        let details = vec![detail_rows("101"), detail_rows("102")];
        let schedules = vec![
            vec![
                ScheduleRow::new("ter", "08:10", "09:50", "Ana"),
                ScheduleRow::new("", "10:10", "11:50", ""),
            ],
            vec![ScheduleRow::new("qui", "14:20", "16:00", "Bruno")],
        ];

        let sections = build_sections("SCC0201", Some("https://example.org"), &details, &schedules).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].code, "101");
        assert_eq!(sections[0].course_code, "SCC0201");
        assert_eq!(sections[0].professor, "Ana");
        assert_eq!(sections[0].slots[1].weekday, Weekday::Tuesday);
        assert_eq!(sections[1].professor, "Bruno");
        assert_eq!(sections[1].url.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_build_sections_count_mismatch() {
        let details = vec![detail_rows("101")];
        let err = build_sections("SCC0201", None, &details, &[]).unwrap_err();
        assert_eq!(
            err,
            IngestError::RowCountMismatch {
                course: "SCC0201".into(),
                details: 1,
                schedules: 0,
            }
        );
    }

    #[test]
    fn test_ingest_course_skips_mismatched_tables() {
        let mut catalog = Catalog::new();
        let course = Course::new("SCC0201", "ICC II", Department::Icmc);
        let inserted = ingest_course(
            &mut catalog,
            course,
            None,
            &[detail_rows("101")],
            &[],
            IngestOptions::default(),
        )
        .unwrap();

        assert!(!inserted);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_ingest_course_inserts_populated_course() {
        let mut catalog = Catalog::new();
        let course = Course::new("SCC0201", "ICC II", Department::Icmc);
        let inserted = ingest_course(
            &mut catalog,
            course,
            None,
            &[detail_rows("101")],
            &[vec![ScheduleRow::new("seg", "08:10", "09:50", "Ana")]],
            IngestOptions::default(),
        )
        .unwrap();

        assert!(inserted);
        let stored = catalog.course("SCC0201").unwrap();
        assert_eq!(stored.section_count(), 1);
        assert_eq!(stored.duration(), Some(100));
    }

    #[test]
    fn test_ingest_course_without_sections() {
        let options = IngestOptions {
            skip_courses_without_sections: true,
        };
        let mut catalog = Catalog::new();
        let course = Course::new("SCC0201", "ICC II", Department::Icmc);
        assert!(!ingest_course(&mut catalog, course.clone(), None, &[], &[], options).unwrap());
        assert!(ingest_course(&mut catalog, course, None, &[], &[], IngestOptions::default()).unwrap());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ingest_course_duplicate_code() {
        let mut catalog = Catalog::new();
        let course = Course::new("SCC0201", "ICC II", Department::Icmc);
        ingest_course(&mut catalog, course.clone(), None, &[], &[], IngestOptions::default()).unwrap();
        let err = ingest_course(&mut catalog, course, None, &[], &[], IngestOptions::default())
            .unwrap_err();
        assert_eq!(err, IngestError::DuplicateCourse { code: "SCC0201".into() });
    }

    #[test]
    fn test_parse_requirements() {
        let rows = vec![
            ("SCC0221 - ICC I".to_string(), "Requisito".to_string()),
            ("".to_string(), "Requisito fraco".to_string()),
        ];
        let reqs = parse_requirements(&rows);
        assert_eq!(reqs, vec![Requirement::new("SCC0221 - ICC I", "Requisito")]);
    }

    #[test]
    fn test_course_from_listing_row() {
        let row = vec!["SCC0201".to_string(), "ICC II".to_string(), "".into(), "".into()];
        let course = course_from_listing_row(&row, Department::Icmc).unwrap();
        assert_eq!(course.code, "SCC0201");
        assert_eq!(course.name, "ICC II");
        assert!(course_from_listing_row(&["".to_string(), "x".to_string()], Department::Icmc).is_none());
        assert!(course_from_listing_row(&["SCC0201".to_string()], Department::Icmc).is_none());
    }
}
