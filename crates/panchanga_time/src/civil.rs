//! Civil calendar date and wallclock types.
//!
//! `CivilDate` is a validated proleptic Gregorian date with day arithmetic
//! backed by Julian day numbers. `WallClock` is a timezone-agnostic time of
//! day; `LocalDateTime` pairs the two. Timezone identity travels separately
//! (it is resolved by an external collaborator, never interpreted here).

use crate::error::TimeError;
use crate::julian::{calendar_from_jdn, julian_day_number, weekday_monday0};

/// Lengths of the twelve months in a non-leap year.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4 and not by 100, unless by 400.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month of a given year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_gregorian_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Create a date, clamping an overlong day to the last day of the month.
    ///
    /// Used for anchor dates carried across years: Feb 29 in a non-leap
    /// year becomes Feb 28.
    pub fn clamped(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 {
            return Err(TimeError::InvalidDate("day must be at least 1"));
        }
        let max = days_in_month(year, month);
        Ok(Self {
            year,
            month,
            day: day.min(max),
        })
    }

    /// Julian day number of this date.
    pub fn jdn(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Date from a Julian day number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = calendar_from_jdn(jdn);
        Self { year, month, day }
    }

    /// This date shifted by a signed number of days.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// Civil weekday: 0 = Monday .. 6 = Sunday (ISO numbering).
    pub fn weekday_monday0(&self) -> u8 {
        weekday_monday0(self.jdn())
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Time of day, timezone-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl WallClock {
    /// Create a validated wallclock time.
    pub fn new(hour: u32, minute: u32, second: f64) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidClock("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidClock("minute must be 0-59"));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidClock("second must be in [0, 60)"));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Elapsed fraction of the day, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second / 86_400.0
    }
}

impl std::fmt::Display for WallClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour, self.minute, self.second as u32
        )
    }
}

/// A civil date with a wallclock time, in some (externally resolved) zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDateTime {
    pub date: CivilDate,
    pub time: WallClock,
}

impl LocalDateTime {
    pub fn new(date: CivilDate, time: WallClock) -> Self {
        Self { date, time }
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_gregorian_leap_year(2024));
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2023));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn clamps_feb_29() {
        let d = CivilDate::clamped(2023, 2, 29).unwrap();
        assert_eq!(d, CivilDate::new(2023, 2, 28).unwrap());
        // Valid days pass through unchanged
        let d = CivilDate::clamped(2024, 2, 29).unwrap();
        assert_eq!(d.day, 29);
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 30).unwrap();
        assert_eq!(d.add_days(3), CivilDate::new(2024, 1, 2).unwrap());
        assert_eq!(d.add_days(-30), CivilDate::new(2023, 11, 30).unwrap());
    }

    #[test]
    fn date_ordering() {
        let a = CivilDate::new(2024, 3, 20).unwrap();
        let b = CivilDate::new(2024, 3, 21).unwrap();
        assert!(a < b);
    }

    #[test]
    fn wallclock_ordering() {
        let dawn = WallClock::new(6, 12, 0.0).unwrap();
        let before = WallClock::new(6, 11, 59.0).unwrap();
        assert!(before < dawn);
    }

    #[test]
    fn wallclock_day_fraction() {
        let noon = WallClock::new(12, 0, 0.0).unwrap();
        assert!((noon.day_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(WallClock::new(24, 0, 0.0).is_err());
        assert!(WallClock::new(0, 60, 0.0).is_err());
        assert!(WallClock::new(0, 0, 60.0).is_err());
        assert!(WallClock::new(0, 0, f64::NAN).is_err());
    }

    #[test]
    fn display_formats() {
        let d = CivilDate::new(2024, 3, 5).unwrap();
        let t = WallClock::new(7, 4, 9.0).unwrap();
        assert_eq!(LocalDateTime::new(d, t).to_string(), "2024-03-05 07:04:09");
    }
}
