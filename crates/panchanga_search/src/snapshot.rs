//! Full panchanga characterisation of a single local moment.

use panchanga_core::{
    KaranaInfo, Masa, NakshatraInfo, Samvatsara, TithiInfo, Vaara, YogaInfo,
    karana_from_elongation, masa_from_new_moon_longitude, nakshatra_from_longitude, normalize_360,
    saka_year, samvatsara_from_year, tithi_from_elongation, vaara_for_moment, yoga_from_sum,
};
use panchanga_time::{LocalDateTime, WallClock};

use crate::error::SearchError;
use crate::provider::{Body, LocationDetails, Provider};

/// Every calendar element for one moment at one site.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangaSnapshot {
    pub local: LocalDateTime,
    pub location: LocationDetails,
    pub sunrise: Option<WallClock>,
    pub sunset: Option<WallClock>,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaara: Vaara,
    pub masa: Masa,
    pub samvatsara: Samvatsara,
    /// 1-based position of the samvatsara in the 60-year cycle.
    pub samvatsara_order: u8,
    pub saka_year: i32,
}

/// Characterise `local` at `location` using `provider` for all
/// astronomical and timezone facts.
///
/// Any collaborator failure aborts the snapshot. A sunrise that simply
/// does not occur (polar day or night) is not a failure; the vaara then
/// falls back to the civil weekday.
pub fn snapshot_at<P: Provider + ?Sized>(
    provider: &P,
    local: &LocalDateTime,
    location: &LocationDetails,
) -> Result<PanchangaSnapshot, SearchError> {
    let utc = provider
        .to_utc(local, &location.timezone_id)
        .map_err(SearchError::Provider)?;

    let sun = provider
        .sidereal_longitude(&utc, Body::Sun)
        .map_err(SearchError::Provider)?;
    let moon = provider
        .sidereal_longitude(&utc, Body::Moon)
        .map_err(SearchError::Provider)?;
    let elongation = normalize_360(moon - sun);
    let sum = normalize_360(sun + moon);

    let tithi = tithi_from_elongation(elongation)?;
    let nakshatra = nakshatra_from_longitude(moon)?;
    let yoga = yoga_from_sum(sum)?;
    let karana = karana_from_elongation(elongation)?;

    let new_moon = provider
        .preceding_new_moon(&utc)
        .map_err(SearchError::Provider)?;
    let new_moon_sun = provider
        .sidereal_longitude(&new_moon, Body::Sun)
        .map_err(SearchError::Provider)?;
    let masa = masa_from_new_moon_longitude(new_moon_sun)?;

    let (sunrise, sunset) = provider
        .sunrise_sunset(
            local.date,
            location.latitude_deg,
            location.longitude_deg,
            &location.timezone_id,
        )
        .map_err(SearchError::Provider)?;
    let vaara = vaara_for_moment(local, sunrise);

    let (samvatsara, samvatsara_order) = samvatsara_from_year(local.date.year);
    let saka = saka_year(local.date);

    Ok(PanchangaSnapshot {
        local: *local,
        location: location.clone(),
        sunrise,
        sunset,
        sun_longitude_deg: sun,
        moon_longitude_deg: moon,
        tithi,
        nakshatra,
        yoga,
        karana,
        vaara,
        masa,
        samvatsara,
        samvatsara_order,
        saka_year: saka,
    })
}
