//! Saka era year from a civil date.
//!
//! The Saka year turns over at the spring-equinox cutoff: March 21 in a
//! Gregorian leap year, March 22 otherwise. On or after the cutoff the
//! Saka year is the civil year minus 78; before it, minus 79.

use panchanga_time::{CivilDate, is_gregorian_leap_year};

/// Offset from the civil year on or after the spring cutoff.
pub const SAKA_OFFSET_AFTER_CUTOFF: i32 = 78;

/// Cutoff day in March for a given civil year.
pub fn saka_cutoff_day(year: i32) -> u32 {
    if is_gregorian_leap_year(year) { 21 } else { 22 }
}

/// Saka era year for a civil date.
pub fn saka_year(date: CivilDate) -> i32 {
    let cutoff = saka_cutoff_day(date.year);
    let at_or_after = (date.month, date.day) >= (3, cutoff);
    if at_or_after {
        date.year - SAKA_OFFSET_AFTER_CUTOFF
    } else {
        date.year - SAKA_OFFSET_AFTER_CUTOFF - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn leap_year_cutoff_is_21() {
        assert_eq!(saka_cutoff_day(2024), 21);
        assert_eq!(saka_cutoff_day(2023), 22);
        assert_eq!(saka_cutoff_day(1900), 22);
        assert_eq!(saka_cutoff_day(2000), 21);
    }

    #[test]
    fn day_before_cutoff() {
        assert_eq!(saka_year(date(2024, 3, 20)), 1945);
    }

    #[test]
    fn day_at_cutoff() {
        assert_eq!(saka_year(date(2024, 3, 21)), 1946);
    }

    #[test]
    fn non_leap_cutoff() {
        assert_eq!(saka_year(date(2023, 3, 21)), 1944);
        assert_eq!(saka_year(date(2023, 3, 22)), 1945);
    }

    #[test]
    fn months_far_from_cutoff() {
        assert_eq!(saka_year(date(2024, 1, 1)), 1945);
        assert_eq!(saka_year(date(2024, 12, 31)), 1946);
    }

    #[test]
    fn comparison_is_month_then_day() {
        // April 1 is after the cutoff even though 1 < 21
        assert_eq!(saka_year(date(2024, 4, 1)), 1946);
        // February 25 is before it even though 25 > 21
        assert_eq!(saka_year(date(2024, 2, 25)), 1945);
    }
}
