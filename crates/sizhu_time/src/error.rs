//! Error types for civil date validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the month's length for the given year.
    InvalidDay { month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
    /// Malformed `YYYY-MM-DDThh:mm` text.
    Parse(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (1-12)"),
            Self::InvalidDay { month, day } => {
                write!(f, "invalid day {day} for month {month}")
            }
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (0-23)"),
            Self::InvalidMinute(m) => write!(f, "invalid minute: {m} (0-59)"),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for DateError {}
