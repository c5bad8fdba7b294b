//! Pairwise conflict detection between sections.
//!
//! Sections are nodes of an implicit conflict graph; an edge joins two
//! sections whose weekly slots overlap. The timetable search looks for a
//! large independent set on this graph.
//!
//! # Complexity
//! `conflict_counts` is O(n² · s²) for n sections of s slots each.

use std::collections::HashMap;

use log::trace;

use crate::error::ScheduleError;
use crate::models::{Course, Section};

/// Whether any slot of `x` overlaps any slot of `y`.
///
/// Symmetric. Not irreflexive: a section with slots overlaps itself, so
/// callers exclude self-pairs.
///
/// # Errors
/// `MalformedTimeSlot` if a same-day pair has a missing time.
pub fn class_overlaps(x: &Section, y: &Section) -> Result<bool, ScheduleError> {
    x.overlaps(y)
}

/// Whether any section of one course overlaps any section of the other.
pub fn course_overlaps(a: &Course, b: &Course) -> Result<bool, ScheduleError> {
    for theirs in &b.sections {
        for ours in &a.sections {
            if class_overlaps(ours, theirs)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Counts, for each section, how many other sections in the pool overlap it.
///
/// Sections equal by value are not counted against each other. A pair
/// that cannot be compared (untimed slot) counts as non-conflicting.
///
/// Keyed by section code alone. Codes repeat across courses (most
/// courses have a section `"1"`), and a repeated code keeps the later
/// section's count. Use [`conflict_counts_by_course`] for a key that is
/// unique across a catalog.
pub fn conflict_counts(sections: &[&Section]) -> HashMap<String, usize> {
    sections
        .iter()
        .map(|section| (section.code.clone(), count_conflicts(section, sections)))
        .collect()
}

/// Same as [`conflict_counts`], keyed by `(course_code, section_code)`.
pub fn conflict_counts_by_course(sections: &[&Section]) -> HashMap<(String, String), usize> {
    sections
        .iter()
        .map(|section| {
            (
                (section.course_code.clone(), section.code.clone()),
                count_conflicts(section, sections),
            )
        })
        .collect()
}

fn count_conflicts(section: &Section, sections: &[&Section]) -> usize {
    let mut conflicts = 0;
    for other in sections {
        if *other == section {
            continue;
        }
        match class_overlaps(other, section) {
            Ok(true) => conflicts += 1,
            Ok(false) => {}
            Err(err) => trace!("Treating pair ({}, {}) as free: {err}", section.code, other.code),
        }
    }
    conflicts
}
