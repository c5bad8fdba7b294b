//! Teaching weekdays.
//!
//! Classes meet Monday through Saturday. The catalog abbreviates days
//! with three-letter Portuguese codes (`seg`, `ter`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day on which a section can meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Parses a catalog abbreviation (`seg` .. `sab`), case-insensitive.
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "seg" => Some(Weekday::Monday),
            "ter" => Some(Weekday::Tuesday),
            "qua" => Some(Weekday::Wednesday),
            "qui" => Some(Weekday::Thursday),
            "sex" => Some(Weekday::Friday),
            "sab" | "sáb" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Zero-based index, Monday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Catalog abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Monday => "seg",
            Weekday::Tuesday => "ter",
            Weekday::Wednesday => "qua",
            Weekday::Thursday => "qui",
            Weekday::Friday => "sex",
            Weekday::Saturday => "sab",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}
