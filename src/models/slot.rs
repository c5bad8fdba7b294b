//! Weekly time slot model.
//!
//! A slot is one recurring weekly meeting window of a section.
//!
//! # Overlap
//! Two slots overlap iff they fall on the same weekday and their time
//! ranges intersect. Touching endpoints (`a.end == b.start`) do not
//! overlap, so back-to-back classes are allowed.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Weekday;

/// One recurring weekly occurrence of a section.
///
/// `start`/`end` may be absent when the source row left the cell blank.
/// Such slots are accepted by the model but cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyTimeSlot {
    /// Meeting day.
    pub weekday: Weekday,
    /// Start time of day.
    pub start: Option<NaiveTime>,
    /// End time of day.
    pub end: Option<NaiveTime>,
}

impl WeeklyTimeSlot {
    /// Creates a slot with both times present.
    ///
    /// Does not check the order of `start` and `end`; see [`Self::from_hm`].
    pub fn new(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            weekday,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a slot from `(hour, minute)` pairs.
    ///
    /// Returns `None` if either pair is not a valid time of day, or if
    /// `start` is not before `end`.
    pub fn from_hm(weekday: Weekday, start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start.0, start.1, 0)?;
        let end = NaiveTime::from_hms_opt(end.0, end.1, 0)?;
        if start >= end {
            return None;
        }
        Some(Self::new(weekday, start, end))
    }

    /// Creates a slot whose times are unknown.
    pub fn untimed(weekday: Weekday) -> Self {
        Self {
            weekday,
            start: None,
            end: None,
        }
    }

    /// Both times, if present.
    #[inline]
    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.start?, self.end?))
    }

    /// Whether both start and end are present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.times().is_some()
    }

    /// Length of the meeting in minutes, if both times are present.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (start, end) = self.times()?;
        Some((end - start).num_minutes())
    }

    /// Whether two slots overlap.
    ///
    /// Slots on different weekdays never overlap, even when one of them
    /// is incomplete. Returns `None` when the weekdays match but either
    /// slot lacks a time.
    pub fn overlaps(&self, other: &Self) -> Option<bool> {
        if self.weekday != other.weekday {
            return Some(false);
        }
        let (a_start, a_end) = self.times()?;
        let (b_start, b_end) = other.times()?;
        Some(!(a_end <= b_start || a_start >= b_end))
    }
}

impl fmt::Display for WeeklyTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |t: Option<NaiveTime>| match t {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        };
        write!(f, "{}: {} -> {}", self.weekday, show(self.start), show(self.end))
    }
}
