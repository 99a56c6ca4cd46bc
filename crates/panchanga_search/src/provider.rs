//! Collaborator traits behind which all astronomy and geography live.
//!
//! The snapshot and recurrence layers are pure calendar logic; every
//! external fact (a sidereal longitude, a sunrise, a timezone offset)
//! arrives through one of these traits. Swapping the backend swaps the
//! precision of the whole system without touching the search code.

use panchanga_time::{CivilDate, LocalDateTime, UtcTime, WallClock};

use crate::error::ProviderError;

/// Bodies the ephemeris backend must know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
}

/// A resolved observation site.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDetails {
    /// Human-readable address the site was resolved from.
    pub address: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// IANA timezone identifier, e.g. `Asia/Kolkata`.
    pub timezone_id: String,
}

/// Sidereal positions and lunation geometry.
pub trait Ephemeris {
    /// Sidereal ecliptic longitude of `body` at `utc`, in `[0, 360)`.
    fn sidereal_longitude(&self, utc: &UtcTime, body: Body) -> Result<f64, ProviderError>;

    /// The most recent new-moon instant strictly before `utc`.
    fn preceding_new_moon(&self, utc: &UtcTime) -> Result<UtcTime, ProviderError>;
}

/// Local sunrise and sunset for a civil date at a site.
pub trait RiseSet {
    /// Returns `(sunrise, sunset)` as local wall-clock times. A `None`
    /// component means the event does not occur on that date (polar
    /// day or night); that is a valid answer, not an error.
    fn sunrise_sunset(
        &self,
        date: CivilDate,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_id: &str,
    ) -> Result<(Option<WallClock>, Option<WallClock>), ProviderError>;
}

/// Conversion between site-local wall-clock time and UTC.
pub trait TimeResolver {
    fn to_utc(&self, local: &LocalDateTime, timezone_id: &str) -> Result<UtcTime, ProviderError>;

    /// The current instant, used to anchor searches that start "now".
    fn current_utc(&self) -> Result<UtcTime, ProviderError>;
}

/// Resolution of a free-form place name to coordinates and a timezone.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<LocationDetails, ProviderError>;
}

/// Everything the snapshot and recurrence layers need from a backend.
pub trait Provider: Ephemeris + RiseSet + TimeResolver {}

impl<T: Ephemeris + RiseSet + TimeResolver> Provider for T {}
