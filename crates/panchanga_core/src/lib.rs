//! Discretization of continuous astronomical angles into lunisolar
//! calendar elements.
//!
//! This crate provides the pure classification layer: given normalized
//! sidereal longitudes, clock times, and calendar years, it names the
//! tithi, paksha, nakshatra (with pada), yoga, karana, rashi, masa,
//! vaara, samvatsara, and Saka year. Every function is stateless and
//! deterministic; no ephemeris lives here — longitudes arrive from an
//! external provider already normalized to [0, 360).

pub mod angle;
pub mod error;
pub mod karana;
pub mod masa;
pub mod names;
pub mod nakshatra;
pub mod rashi;
pub mod saka;
pub mod samvatsara;
pub mod tithi;
pub mod vaara;
pub mod yoga;

pub use angle::normalize_360;
pub use error::CoreError;
pub use karana::{
    KARANA_SEGMENT_DEG, Karana, KaranaInfo, karana_from_elongation, karana_from_ordinal,
    karana_ordinal_from_elongation,
};
pub use masa::{ALL_MASAS, Masa, masa_from_new_moon_longitude, masa_from_rashi_index};
pub use names::{Language, NameCatalog, rashi_label};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use saka::{SAKA_OFFSET_AFTER_CUTOFF, saka_cutoff_day, saka_year};
pub use samvatsara::{
    ALL_SAMVATSARAS, SAMVATSARA_EPOCH_YEAR, Samvatsara, samvatsara_from_year,
};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiInfo, tithi_from_elongation};
pub use vaara::{ALL_VAARAS, Vaara, vaara_for_moment, vaara_from_civil};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaInfo, yoga_from_sum};
