//! Snapshot assembly and future-recurrence search for the lunisolar
//! calendar.
//!
//! Astronomy and geography live behind the collaborator traits in
//! [`provider`]; [`mean_motion`] supplies a deterministic built-in
//! backend. [`snapshot_at`] characterises one moment, and
//! [`find_recurrences`] scans future years for days sharing a
//! reference moment's (masa, paksha, tithi) identity.

pub mod error;
pub mod mean_motion;
pub mod provider;
pub mod recurrence;
pub mod report;
pub mod snapshot;

pub use error::{ProviderError, SearchError};
pub use mean_motion::MeanMotionProvider;
pub use provider::{Body, Ephemeris, Geocoder, LocationDetails, Provider, RiseSet, TimeResolver};
pub use recurrence::{
    DEFAULT_LEAD_DAYS, DEFAULT_MAX_SCAN_YEARS, DEFAULT_WINDOW_DAYS, Occurrence, RecurrenceConfig,
    RecurrenceResult, RecurrenceTarget, ScanWindow, SearchBound, find_recurrences,
};
pub use report::{format_recurrences, format_snapshot};
pub use snapshot::{PanchangaSnapshot, snapshot_at};
