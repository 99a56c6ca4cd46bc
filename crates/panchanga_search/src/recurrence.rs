//! Forward search for years in which a lunisolar date recurs.
//!
//! The lunisolar triple (masa, paksha, tithi) of a reference moment
//! drifts against the civil calendar, so its anniversary lands on a
//! different civil date each year. For each candidate year the search
//! scans a fixed window of civil days straddling the reference
//! anniversary, sampling each day at the reference wall-clock time, and
//! keeps the first day whose triple matches.

use panchanga_core::{
    Masa, TithiInfo, masa_from_new_moon_longitude, normalize_360, tithi_from_elongation,
};
use panchanga_time::{CivilDate, LocalDateTime};

use crate::error::SearchError;
use crate::provider::{Body, LocationDetails, Provider};
use crate::snapshot::{PanchangaSnapshot, snapshot_at};

/// Days scanned per candidate year.
pub const DEFAULT_WINDOW_DAYS: u32 = 65;

/// Days before the civil anniversary at which each window opens.
pub const DEFAULT_LEAD_DAYS: i64 = 32;

/// Hard ceiling on years scanned in count-bounded searches.
pub const DEFAULT_MAX_SCAN_YEARS: u32 = 120;

/// The lunisolar identity being searched for. Paksha is carried inside
/// the tithi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecurrenceTarget {
    pub masa: Masa,
    pub tithi: TithiInfo,
}

/// One matched day, with its full characterisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    /// Candidate civil year this match was found for.
    pub year: i32,
    pub snapshot: PanchangaSnapshot,
}

/// Outcome of a recurrence search.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceResult {
    pub target: RecurrenceTarget,
    /// Matches in strictly increasing date order, at most one per
    /// candidate year.
    pub occurrences: Vec<Occurrence>,
    /// Candidate years whose window produced no match.
    pub gap_years: Vec<i32>,
}

/// How much future to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBound {
    /// Stop after this many matches.
    Count(u32),
    /// Scan exactly this many candidate years.
    Years(u32),
}

/// Tunable parameters of the year scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceConfig {
    pub window_days: u32,
    pub lead_days: i64,
    /// First candidate year. `None` means the provider's current year.
    pub start_year: Option<i32>,
    /// Ceiling on years scanned when the bound is a match count.
    pub max_scan_years: u32,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            lead_days: DEFAULT_LEAD_DAYS,
            start_year: None,
            max_scan_years: DEFAULT_MAX_SCAN_YEARS,
        }
    }
}

/// Civil days of one candidate year's scan, in chronological order.
#[derive(Debug, Clone)]
pub struct ScanWindow {
    next: CivilDate,
    remaining: u32,
}

impl ScanWindow {
    /// Window opening `lead_days` before `anchor` and spanning
    /// `window_days` consecutive days.
    pub fn for_anchor(anchor: CivilDate, lead_days: i64, window_days: u32) -> Self {
        Self {
            next: anchor.add_days(-lead_days),
            remaining: window_days,
        }
    }
}

impl Iterator for ScanWindow {
    type Item = CivilDate;

    fn next(&mut self) -> Option<CivilDate> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next;
        self.next = day.add_days(1);
        self.remaining -= 1;
        Some(day)
    }
}

/// The (masa, tithi) identity of one local moment. Cheaper than a full
/// snapshot; this is the per-day sampling path.
fn sample_target<P: Provider + ?Sized>(
    provider: &P,
    local: &LocalDateTime,
    location: &LocationDetails,
) -> Result<RecurrenceTarget, SearchError> {
    let utc = provider
        .to_utc(local, &location.timezone_id)
        .map_err(SearchError::Provider)?;
    let sun = provider
        .sidereal_longitude(&utc, Body::Sun)
        .map_err(SearchError::Provider)?;
    let moon = provider
        .sidereal_longitude(&utc, Body::Moon)
        .map_err(SearchError::Provider)?;
    let tithi = tithi_from_elongation(normalize_360(moon - sun))?;

    let new_moon = provider
        .preceding_new_moon(&utc)
        .map_err(SearchError::Provider)?;
    let new_moon_sun = provider
        .sidereal_longitude(&new_moon, Body::Sun)
        .map_err(SearchError::Provider)?;
    let masa = masa_from_new_moon_longitude(new_moon_sun)?;

    Ok(RecurrenceTarget { masa, tithi })
}

/// Find future years in which the lunisolar triple of `reference`
/// recurs at `location`.
///
/// The reference moment itself must characterise cleanly; any failure
/// there aborts the search. Inside the per-year scan a failed sample
/// only skips that day. Years whose whole window yields no match are
/// reported in [`RecurrenceResult::gap_years`].
pub fn find_recurrences<P: Provider + ?Sized>(
    provider: &P,
    reference: &LocalDateTime,
    location: &LocationDetails,
    bound: SearchBound,
    config: &RecurrenceConfig,
) -> Result<RecurrenceResult, SearchError> {
    let target = sample_target(provider, reference, location)
        .map_err(|e| match e {
            SearchError::Provider(p) => SearchError::Reference(p),
            other => other,
        })?;

    let start_year = match config.start_year {
        Some(year) => year,
        None => provider.current_utc().map_err(SearchError::Reference)?.year,
    };

    let year_limit = match bound {
        SearchBound::Years(years) => years,
        SearchBound::Count(_) => config.max_scan_years,
    };

    let mut occurrences = Vec::new();
    let mut gap_years = Vec::new();

    for offset in 0..year_limit {
        if let SearchBound::Count(wanted) = bound {
            if occurrences.len() as u32 >= wanted {
                break;
            }
        }
        let year = start_year + offset as i32;
        // Clamp handles a Feb 29 reference in common years.
        let anchor = CivilDate::clamped(year, reference.date.month, reference.date.day)?;

        let mut matched = None;
        for day in ScanWindow::for_anchor(anchor, config.lead_days, config.window_days) {
            let local = LocalDateTime::new(day, reference.time);
            let Ok(sample) = sample_target(provider, &local, location) else {
                continue;
            };
            if sample != target {
                continue;
            }
            let Ok(snapshot) = snapshot_at(provider, &local, location) else {
                continue;
            };
            matched = Some(Occurrence { year, snapshot });
            break;
        }
        match matched {
            Some(occurrence) => occurrences.push(occurrence),
            None => gap_years.push(year),
        }
    }

    Ok(RecurrenceResult {
        target,
        occurrences,
        gap_years,
    })
}
