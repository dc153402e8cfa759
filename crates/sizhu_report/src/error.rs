//! Error types for report rendering.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart/classification serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    /// JSON serialization failed.
    Serialize(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl Error for ReportError {}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}
