//! Golden-value integration tests for snapshot assembly.
//!
//! The angular cases pin the classification layer to hand-computed
//! values; the end-to-end cases run the deterministic built-in backend
//! and check cross-element laws rather than absolute ephemeris output.

use panchanga_core::{
    Karana, Nakshatra, Paksha, Tithi, Yoga, karana_from_elongation, nakshatra_from_longitude,
    normalize_360, tithi_from_elongation, yoga_from_sum,
};
use panchanga_search::{
    Geocoder, LocationDetails, MeanMotionProvider, SearchError, snapshot_at,
};
use panchanga_time::{CivilDate, LocalDateTime, UtcTime, WallClock};

fn provider() -> MeanMotionProvider {
    MeanMotionProvider::new(UtcTime::new(2024, 3, 21, 0, 0, 0.0))
}

fn bengaluru() -> LocationDetails {
    provider().resolve("Bengaluru").unwrap()
}

/// Sun at 10 deg, Moon at 250 deg: elongation 240 falls in the sixth
/// tithi of the dark half.
#[test]
fn angular_scenario_tithi() {
    let elongation = normalize_360(250.0 - 10.0);
    let info = tithi_from_elongation(elongation).unwrap();
    assert_eq!(info.tithi_index, 20);
    assert_eq!(info.paksha, Paksha::Krishna);
    assert_eq!(info.tithi, Tithi::Shashthi);
    assert_eq!(info.tithi_in_paksha, 6);
}

#[test]
fn angular_scenario_yoga() {
    let sum = normalize_360(10.0 + 250.0);
    let info = yoga_from_sum(sum).unwrap();
    assert_eq!(info.yoga_index, 19);
    assert_eq!(info.yoga, Yoga::Shiva);
}

#[test]
fn angular_scenario_nakshatra() {
    let info = nakshatra_from_longitude(250.0).unwrap();
    assert_eq!(info.nakshatra_index, 18);
    assert_eq!(info.nakshatra, Nakshatra::Mula);
    assert_eq!(info.pada, 4);
}

#[test]
fn angular_scenario_karana() {
    let info = karana_from_elongation(240.0).unwrap();
    assert_eq!(info.ordinal, 41);
    assert_eq!(info.karana, Karana::Garaja);
}

#[test]
fn snapshot_obeys_cross_element_laws() {
    let local = LocalDateTime::new(
        CivilDate::new(2024, 3, 21).unwrap(),
        WallClock::new(12, 0, 0.0).unwrap(),
    );
    let snap = snapshot_at(&provider(), &local, &bengaluru()).unwrap();

    // Two karanas per tithi, everywhere in the month.
    assert_eq!((snap.karana.ordinal - 1) / 2, snap.tithi.tithi_index);
    // Shukla is indices 0-14, Krishna 15-29.
    let shukla = snap.tithi.tithi_index < 15;
    assert_eq!(snap.tithi.paksha == Paksha::Shukla, shukla);
    assert_eq!(snap.saka_year, 1946);
    assert_eq!(snap.samvatsara_order, 38);
}

/// Before local sunrise the vaara is still the previous day's.
#[test]
fn vaara_re_anchors_at_sunrise() {
    let date = CivilDate::new(2024, 3, 21).unwrap();
    let before = LocalDateTime::new(date, WallClock::new(5, 0, 0.0).unwrap());
    let after = LocalDateTime::new(date, WallClock::new(7, 0, 0.0).unwrap());
    let p = provider();
    let loc = bengaluru();

    let snap_before = snapshot_at(&p, &before, &loc).unwrap();
    let snap_after = snapshot_at(&p, &after, &loc).unwrap();
    assert_ne!(snap_before.vaara, snap_after.vaara);
    assert_eq!(
        (snap_before.vaara.index() + 1) % 7,
        snap_after.vaara.index()
    );
}

/// With no sunrise (polar site) the vaara follows the civil weekday
/// for the whole day.
#[test]
fn polar_site_uses_civil_weekday() {
    let date = CivilDate::new(2024, 6, 21).unwrap();
    let early = LocalDateTime::new(date, WallClock::new(1, 0, 0.0).unwrap());
    let late = LocalDateTime::new(date, WallClock::new(23, 0, 0.0).unwrap());
    let polar = LocationDetails {
        address: "Longyearbyen".to_string(),
        latitude_deg: 78.22,
        longitude_deg: 15.63,
        timezone_id: "UTC".to_string(),
    };
    let p = provider();

    let snap_early = snapshot_at(&p, &early, &polar).unwrap();
    let snap_late = snapshot_at(&p, &late, &polar).unwrap();
    assert!(snap_early.sunrise.is_none());
    assert_eq!(snap_early.vaara, snap_late.vaara);
}

#[test]
fn collaborator_failure_aborts_snapshot() {
    let local = LocalDateTime::new(
        CivilDate::new(2024, 3, 21).unwrap(),
        WallClock::new(12, 0, 0.0).unwrap(),
    );
    let mut loc = bengaluru();
    loc.timezone_id = "Atlantis/Lost".to_string();
    let err = snapshot_at(&provider(), &local, &loc).unwrap_err();
    assert!(matches!(err, SearchError::Provider(_)));
}
