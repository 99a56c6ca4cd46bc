//! Error types for the snapshot and recurrence layers.

use std::error::Error;
use std::fmt;

use panchanga_core::CoreError;
use panchanga_time::TimeError;

/// Failure reported by a collaborator (ephemeris, rise/set, time
/// resolution or geocoding backend).
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// A named resource (place, timezone) is unknown to the backend.
    NotFound(String),
    /// The backend could not produce a value for a specific instant.
    Unavailable(&'static str),
    /// Date or clock arithmetic failed inside the backend.
    Time(TimeError),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotFound(what) => write!(f, "not found: {what}"),
            ProviderError::Unavailable(what) => write!(f, "unavailable: {what}"),
            ProviderError::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ProviderError {}

impl From<TimeError> for ProviderError {
    fn from(e: TimeError) -> Self {
        ProviderError::Time(e)
    }
}

/// Failure of a snapshot or recurrence computation.
///
/// A [`SearchError::Reference`] means the reference moment itself could
/// not be characterised, which aborts the whole search. Per-sample
/// failures during the year scan never surface here; those days are
/// skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The reference moment could not be characterised.
    Reference(ProviderError),
    /// A collaborator failed while assembling a snapshot.
    Provider(ProviderError),
    /// An angular input violated the normalisation contract.
    Core(CoreError),
    /// Calendar arithmetic failed.
    Time(TimeError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Reference(e) => write!(f, "reference moment failed: {e}"),
            SearchError::Provider(e) => write!(f, "provider failed: {e}"),
            SearchError::Core(e) => write!(f, "core error: {e}"),
            SearchError::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        SearchError::Core(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        SearchError::Time(e)
    }
}
