//! Civil calendar date/time with minute precision.
//!
//! `CivilDateTime` is the canonical validated input representation for the
//! pillar engine. Time-zone resolution is the caller's responsibility: the
//! fields describe a local civil moment, not an instant on a global scale.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::DateError;
use crate::julian::{days_in_month, julian_day_number};

/// A validated local civil date/time with minute precision.
///
/// Construction via [`CivilDateTime::new`] is the only place structural
/// validity is checked; every function consuming a `CivilDateTime` may rely
/// on its fields being a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl CivilDateTime {
    /// Validate and construct a civil date/time.
    ///
    /// Historical, negative, and far-future years are all accepted; only
    /// structurally impossible dates (month 13, Feb 30, hour 24, ...) are
    /// rejected.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { month, day });
        }
        if hour > 23 {
            return Err(DateError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(DateError::InvalidMinute(minute));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Julian day number of the date part.
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = DateError;

    /// Parse `YYYY-MM-DDThh:mm` (a leading `-` on the year is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = body.split('T').collect();
        if parts.len() != 2 {
            return Err(DateError::Parse(format!("expected YYYY-MM-DDThh:mm, got {s}")));
        }
        let date_parts: Vec<&str> = parts[0].split('-').collect();
        let time_parts: Vec<&str> = parts[1].split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 2 {
            return Err(DateError::Parse(format!("invalid date/time format: {s}")));
        }
        let year: i32 = date_parts[0]
            .parse()
            .map_err(|e| DateError::Parse(format!("{e}")))?;
        let year = if negative { -year } else { year };
        let month: u32 = date_parts[1]
            .parse()
            .map_err(|e| DateError::Parse(format!("{e}")))?;
        let day: u32 = date_parts[2]
            .parse()
            .map_err(|e| DateError::Parse(format!("{e}")))?;
        let hour: u32 = time_parts[0]
            .parse()
            .map_err(|e| DateError::Parse(format!("{e}")))?;
        let minute: u32 = time_parts[1]
            .parse()
            .map_err(|e| DateError::Parse(format!("{e}")))?;
        Self::new(year, month, day, hour, minute)
    }
}
