//! Strict date and date-time argument parsing.
//!
//! Every scheduled command takes its dates in one of exactly two shapes:
//! - `2024-12-01` (a calendar date)
//! - `2024-12-01 23:59` (a date with a time of day)
//!
//! Nothing looser is accepted. A date given without a time stays a plain
//! date rather than gaining an implied midnight.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Strict format for dates with a time of day.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Strict format for plain calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shape gate applied before chrono parsing. chrono alone is lenient
/// about digit counts (`824-1-2` parses), and the accepted grammar
/// requires exactly `yyyy-MM-dd` with an optional ` HH:mm`.
static DATE_SHAPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}( \d{2}:\d{2})?$")
        .unwrap_or_else(|e| panic!("Invalid date shape regex: {e}"))
});

/// A date argument, with or without a time of day.
///
/// The two cases stay distinct through storage and display so that an
/// all-day deadline never renders with a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrDateTime {
    /// A date with a time component (`yyyy-MM-dd HH:mm`).
    DateTime(NaiveDateTime),
    /// A plain calendar date (`yyyy-MM-dd`).
    Date(NaiveDate),
}

impl DateOrDateTime {
    /// The calendar day, dropping any time component.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date(),
            Self::Date(d) => *d,
        }
    }

    /// Whether a time of day was given.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl Serialize for DateOrDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateOrDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_date_or_datetime(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid date or date-time: {s}")))
    }
}

/// Parse a strict date or date-time argument.
///
/// Tries `yyyy-MM-dd HH:mm` first, then `yyyy-MM-dd`. Anything else,
/// including out-of-range calendar values like `2024-02-30`, yields
/// `None`.
#[must_use]
pub fn parse_date_or_datetime(input: &str) -> Option<DateOrDateTime> {
    if !DATE_SHAPE_PATTERN.is_match(input) {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, DATETIME_FORMAT) {
        return Some(DateOrDateTime::DateTime(dt));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .map(DateOrDateTime::Date)
}
