//! Calendar and time primitives for lunisolar calendar computation.
//!
//! This crate provides:
//! - Julian day conversion and civil weekday determination
//! - Validated civil dates with day arithmetic and Feb-29 clamping
//! - Wallclock and local date/time value types
//! - The canonical `UtcTime` instant representation
//!
//! No timezone database lives here: timezone identifiers are opaque strings
//! resolved by external collaborators.

pub mod civil;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use civil::{CivilDate, LocalDateTime, WallClock, days_in_month, is_gregorian_leap_year};
pub use error::TimeError;
pub use julian::{calendar_from_jdn, calendar_to_jd, jd_to_calendar, julian_day_number};
pub use utc_time::UtcTime;
