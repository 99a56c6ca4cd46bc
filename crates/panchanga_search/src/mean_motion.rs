//! A self-contained backend built on mean motions.
//!
//! Longitudes are linear functions of Julian date anchored at J2000;
//! timezones come from a small fixed-offset table and sunrise/sunset
//! are flat 06:00/18:00. Accuracy is a few degrees for the Moon, which
//! is enough to exercise the snapshot and recurrence machinery end to
//! end and to keep tests deterministic. A precision ephemeris slots in
//! behind the same traits.

use panchanga_core::normalize_360;
use panchanga_time::{CivilDate, LocalDateTime, UtcTime, WallClock, calendar_to_jd};

use crate::error::ProviderError;
use crate::provider::{Body, Ephemeris, Geocoder, LocationDetails, RiseSet, TimeResolver};

/// J2000.0 epoch, 2000-01-01 12:00 UTC.
const EPOCH_JD: f64 = 2_451_545.0;

/// Mean sidereal longitudes at the epoch, degrees.
const SUN_LON_AT_EPOCH: f64 = 256.60;
const MOON_LON_AT_EPOCH: f64 = 194.46;

/// Mean motions, degrees per day.
const SUN_RATE: f64 = 0.985_647_36;
const MOON_RATE: f64 = 13.176_396_48;
const ELONGATION_RATE: f64 = MOON_RATE - SUN_RATE;

/// Mean synodic month, days.
const SYNODIC_DAYS: f64 = 360.0 / ELONGATION_RATE;

/// Latitude beyond which the flat rise/set model gives up.
const POLAR_LATITUDE_DEG: f64 = 66.5;

/// Fixed UTC offsets, hours. No daylight saving.
const TIMEZONE_OFFSETS: &[(&str, f64)] = &[
    ("UTC", 0.0),
    ("Asia/Kolkata", 5.5),
    ("Asia/Tokyo", 9.0),
    ("Europe/London", 0.0),
    ("America/New_York", -5.0),
    ("America/Los_Angeles", -8.0),
];

/// Built-in geocoding table.
const PLACES: &[(&str, f64, f64, &str)] = &[
    ("Bengaluru, India", 12.9716, 77.5946, "Asia/Kolkata"),
    ("Mysuru, India", 12.2958, 76.6394, "Asia/Kolkata"),
    ("London, UK", 51.5074, -0.1278, "Europe/London"),
    ("New York, USA", 40.7128, -74.0060, "America/New_York"),
];

/// Backend driven entirely by mean motions and fixed tables.
#[derive(Debug, Clone)]
pub struct MeanMotionProvider {
    now: UtcTime,
}

impl MeanMotionProvider {
    /// Create a provider whose notion of "now" is fixed at `now`.
    pub fn new(now: UtcTime) -> Self {
        Self { now }
    }

    fn offset_hours(timezone_id: &str) -> Result<f64, ProviderError> {
        TIMEZONE_OFFSETS
            .iter()
            .find(|(id, _)| *id == timezone_id)
            .map(|(_, hours)| *hours)
            .ok_or_else(|| ProviderError::NotFound(format!("timezone {timezone_id}")))
    }

    fn longitude_at_jd(jd: f64, body: Body) -> f64 {
        let days = jd - EPOCH_JD;
        match body {
            Body::Sun => normalize_360(SUN_LON_AT_EPOCH + SUN_RATE * days),
            Body::Moon => normalize_360(MOON_LON_AT_EPOCH + MOON_RATE * days),
        }
    }
}

impl Ephemeris for MeanMotionProvider {
    fn sidereal_longitude(&self, utc: &UtcTime, body: Body) -> Result<f64, ProviderError> {
        Ok(Self::longitude_at_jd(utc.to_jd_utc(), body))
    }

    fn preceding_new_moon(&self, utc: &UtcTime) -> Result<UtcTime, ProviderError> {
        let jd = utc.to_jd_utc();
        let elongation = normalize_360(
            Self::longitude_at_jd(jd, Body::Moon) - Self::longitude_at_jd(jd, Body::Sun),
        );
        let mut new_moon_jd = jd - elongation / ELONGATION_RATE;
        // The instant must be strictly before the input.
        if new_moon_jd >= jd {
            new_moon_jd -= SYNODIC_DAYS;
        }
        Ok(UtcTime::from_jd_utc(new_moon_jd))
    }
}

impl RiseSet for MeanMotionProvider {
    fn sunrise_sunset(
        &self,
        _date: CivilDate,
        latitude_deg: f64,
        _longitude_deg: f64,
        _timezone_id: &str,
    ) -> Result<(Option<WallClock>, Option<WallClock>), ProviderError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(ProviderError::Unavailable("latitude outside [-90, 90]"));
        }
        // A polar site legitimately has no rise or set; that is an
        // answer, not a failure.
        if latitude_deg.abs() > POLAR_LATITUDE_DEG {
            return Ok((None, None));
        }
        let rise = WallClock::new(6, 0, 0.0).map_err(ProviderError::Time)?;
        let set = WallClock::new(18, 0, 0.0).map_err(ProviderError::Time)?;
        Ok((Some(rise), Some(set)))
    }
}

impl TimeResolver for MeanMotionProvider {
    fn to_utc(&self, local: &LocalDateTime, timezone_id: &str) -> Result<UtcTime, ProviderError> {
        let offset = Self::offset_hours(timezone_id)?;
        let day_frac = local.date.day as f64 + local.time.day_fraction();
        let local_jd = calendar_to_jd(local.date.year, local.date.month, day_frac);
        Ok(UtcTime::from_jd_utc(local_jd - offset / 24.0))
    }

    fn current_utc(&self) -> Result<UtcTime, ProviderError> {
        Ok(self.now)
    }
}

impl Geocoder for MeanMotionProvider {
    fn resolve(&self, place: &str) -> Result<LocationDetails, ProviderError> {
        let needle = place.to_ascii_lowercase();
        PLACES
            .iter()
            .find(|(name, _, _, _)| name.to_ascii_lowercase().contains(&needle))
            .map(|(name, lat, lon, tz)| LocationDetails {
                address: (*name).to_string(),
                latitude_deg: *lat,
                longitude_deg: *lon,
                timezone_id: (*tz).to_string(),
            })
            .ok_or_else(|| ProviderError::NotFound(format!("place {place}")))
    }
}
