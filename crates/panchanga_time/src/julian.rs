//! Julian day conversion for the proleptic Gregorian calendar.
//!
//! Integer Julian day numbers (JDN) drive date arithmetic and weekday
//! determination; fractional Julian dates carry the time of day.

/// Julian day number for a Gregorian calendar date (Fliegel-Van Flandern).
///
/// The JDN labels the day beginning at the preceding noon UT;
/// `julian_day_number(2000, 1, 1)` is 2451545.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian calendar date (year, month, day) from a Julian day number.
pub fn calendar_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = (e - (153 * m + 2) / 5 + 1) as u32;
    let month = (m + 3 - 12 * (m / 10)) as u32;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}

/// Julian date (UTC scale) from a calendar date with fractional day.
///
/// `day_frac` is the day of month plus the elapsed fraction of the day,
/// e.g. 15.5 for 12:00 on the 15th.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor() as u32;
    let frac = day_frac - day as f64;
    julian_day_number(year, month, day) as f64 - 0.5 + frac
}

/// Calendar date (year, month, fractional day) from a Julian date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let jdn = shifted.floor() as i64;
    let frac = shifted - jdn as f64;
    let (year, month, day) = calendar_from_jdn(jdn);
    (year, month, day as f64 + frac)
}

/// Civil weekday of a Julian day number: 0 = Monday .. 6 = Sunday.
pub fn weekday_monday0(jdn: i64) -> u8 {
    jdn.rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn jdn_round_trip() {
        for &(y, m, d) in &[
            (1987, 3, 29),
            (2000, 2, 29),
            (2024, 12, 31),
            (1900, 1, 1),
            (2100, 6, 15),
        ] {
            let jdn = julian_day_number(y, m, d);
            assert_eq!(calendar_from_jdn(jdn), (y, m, d));
        }
    }

    #[test]
    fn jd_noon_is_whole() {
        // 2000-01-01 12:00 UT is JD 2451545.0 exactly
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_round_trip_with_fraction() {
        let jd = calendar_to_jd(2024, 3, 20.75);
        let (y, m, df) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 3));
        assert!((df - 20.75).abs() < 1e-9);
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2000-01-01 was a Saturday, 2000-01-03 a Monday
        assert_eq!(weekday_monday0(julian_day_number(2000, 1, 1)), 5);
        assert_eq!(weekday_monday0(julian_day_number(2000, 1, 3)), 0);
        // 2024-03-21 was a Thursday
        assert_eq!(weekday_monday0(julian_day_number(2024, 3, 21)), 3);
    }
}
