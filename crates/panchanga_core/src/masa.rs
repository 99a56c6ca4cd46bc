//! Masa (lunar month) naming from the Sun's rashi at the preceding new moon.
//!
//! Amanta convention: the month running from one new moon to the next is
//! named by where the Sun stood at the opening new moon. The mapping is a
//! fixed permutation, not a plain offset: a new moon with the Sun in Meena
//! (sector 11) opens Chaitra (month 0), one in Mesha (sector 0) opens
//! Vaishakha (month 1), and so on around the wheel.

use crate::error::CoreError;
use crate::rashi::rashi_from_longitude;

/// The 12 lunar months from Chaitra to Phalguna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Masa {
    Chaitra = 0,
    Vaishakha = 1,
    Jyeshtha = 2,
    Ashadha = 3,
    Shravana = 4,
    Bhadrapada = 5,
    Ashvin = 6,
    Kartika = 7,
    Margashirsha = 8,
    Pausha = 9,
    Magha = 10,
    Phalguna = 11,
}

const MASA_NAMES: [&str; 12] = [
    "Chaitra",
    "Vaishakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Ashvin",
    "Kartika",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
];

/// All 12 masas in calendar order (0 = Chaitra .. 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

/// Fixed Amanta permutation: rashi sector at the new moon -> masa.
///
/// Entry order follows the rashi index (0 = Mesha .. 11 = Meena).
const MASA_FROM_RASHI: [Masa; 12] = [
    Masa::Vaishakha,    // Mesha
    Masa::Jyeshtha,     // Vrishabha
    Masa::Ashadha,      // Mithuna
    Masa::Shravana,     // Karkataka
    Masa::Bhadrapada,   // Simha
    Masa::Ashvin,       // Kanya
    Masa::Kartika,      // Tula
    Masa::Margashirsha, // Vrishchika
    Masa::Pausha,       // Dhanu
    Masa::Magha,        // Makara
    Masa::Phalguna,     // Kumbha
    Masa::Chaitra,      // Meena
];

impl Masa {
    /// Transliterated name of the masa.
    pub const fn name(self) -> &'static str {
        MASA_NAMES[self as usize]
    }

    /// 0-based calendar index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Masa for the Sun's rashi sector index at the preceding new moon.
pub fn masa_from_rashi_index(rashi_index: u8) -> Result<Masa, CoreError> {
    if rashi_index > 11 {
        return Err(CoreError::InvalidIndex("rashi index must be 0-11"));
    }
    Ok(MASA_FROM_RASHI[rashi_index as usize])
}

/// Masa from the Sun's sidereal longitude at the preceding new moon.
pub fn masa_from_new_moon_longitude(sun_lon_deg: f64) -> Result<Masa, CoreError> {
    let rashi = rashi_from_longitude(sun_lon_deg)?;
    masa_from_rashi_index(rashi.rashi_index)
}
