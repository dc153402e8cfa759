//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_time::DateError;

/// Errors from four-pillar chart computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// The supplied timestamp is not a valid civil date/time.
    Date(DateError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Input is flagged as a lunar-calendar date; lunar-to-solar
    /// conversion is not performed.
    LunarCalendar,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(e) => write!(f, "invalid input: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::LunarCalendar => {
                write!(f, "lunar-calendar input is not supported; convert to a civil date first")
            }
        }
    }
}

impl Error for ChartError {}

impl From<DateError> for ChartError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}
