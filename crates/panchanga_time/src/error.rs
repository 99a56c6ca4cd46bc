//! Error types for calendar and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar construction and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar component outside its valid range.
    InvalidDate(&'static str),
    /// Wallclock component outside its valid range.
    InvalidClock(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidClock(msg) => write!(f, "invalid clock time: {msg}"),
        }
    }
}

impl Error for TimeError {}
