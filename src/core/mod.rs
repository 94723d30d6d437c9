//! Core language of chores.
//!
//! This module owns the free-text command grammar and the strict
//! date/date-time argument format every scheduled command shares.

mod datetime;
mod parser;

pub use datetime::{parse_date_or_datetime, DateOrDateTime};
pub use parser::{parse, ParsedCommand};
