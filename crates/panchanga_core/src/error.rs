//! Error types for calendar discretization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from discretization functions.
///
/// These indicate contract violations by the caller, not recoverable
/// conditions: every angular input must be a finite value in [0, 360)
/// before it reaches a classification function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// Angle was non-finite or outside [0, 360).
    UnnormalizedAngle(&'static str),
    /// Table index outside its fixed range.
    InvalidIndex(&'static str),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnnormalizedAngle(msg) => write!(f, "unnormalized angle: {msg}"),
            Self::InvalidIndex(msg) => write!(f, "invalid index: {msg}"),
        }
    }
}

impl Error for CoreError {}
