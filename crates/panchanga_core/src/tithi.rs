//! Tithi (lunar day) classification from Moon-Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12 degrees of elongation
//! each: 15 in the waxing half (Shukla paksha, ending at Purnima) and 15 in
//! the waning half (Krishna paksha, ending at Amavasya). The fourteen
//! ordinary names repeat in each paksha; only the fifteenth differs.

use crate::angle::ensure_normalized;
use crate::error::CoreError;

/// Elongation span of one tithi: 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half (new moon toward full moon), tithi indices 0-14.
    Shukla,
    /// Waning half (full moon toward new moon), tithi indices 15-29.
    Krishna,
}

impl Paksha {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The sixteen distinct tithi names.
///
/// Prathama through Chaturdashi occur once per paksha; Purnima closes the
/// Shukla half and Amavasya closes the Krishna half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Tithi {
    Prathama = 0,
    Dwitiya = 1,
    Tritiya = 2,
    Chaturthi = 3,
    Panchami = 4,
    Shashthi = 5,
    Saptami = 6,
    Ashtami = 7,
    Navami = 8,
    Dashami = 9,
    Ekadashi = 10,
    Dwadashi = 11,
    Trayodashi = 12,
    Chaturdashi = 13,
    Purnima = 14,
    Amavasya = 15,
}

const TITHI_NAMES: [&str; 16] = [
    "Prathama",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Amavasya",
];

/// The sixteen tithi names in order.
pub const ALL_TITHIS: [Tithi; 16] = [
    Tithi::Prathama,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::Purnima,
    Tithi::Amavasya,
];

impl Tithi {
    /// Transliterated name of the tithi.
    pub const fn name(self) -> &'static str {
        TITHI_NAMES[self as usize]
    }
}

/// Result of tithi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// The tithi name.
    pub tithi: Tithi,
    /// 0-based position in the synodic month (0..30).
    pub tithi_index: u8,
    /// Which half of the month this tithi belongs to.
    pub paksha: Paksha,
    /// 1-based position within the paksha (1..=15).
    pub tithi_in_paksha: u8,
}

/// Classify the tithi from Moon-Sun elongation in degrees [0, 360).
///
/// Index = floor(elongation / 12); indices 0-14 are Shukla, 15-29 Krishna.
pub fn tithi_from_elongation(elongation_deg: f64) -> Result<TithiInfo, CoreError> {
    ensure_normalized(elongation_deg, "tithi elongation")?;
    let tithi_index = (elongation_deg / TITHI_SEGMENT_DEG).floor() as u8;
    let paksha = if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let in_paksha = tithi_index % 15;
    let tithi = match tithi_index {
        14 => Tithi::Purnima,
        29 => Tithi::Amavasya,
        _ => ALL_TITHIS[in_paksha as usize],
    };
    Ok(TithiInfo {
        tithi,
        tithi_index,
        paksha,
        tithi_in_paksha: in_paksha + 1,
    })
}
