//! Rashi (solar zodiac sector) classification from the Sun's longitude.
//!
//! Twelve equal sectors of 30 degrees, Mesha at 0 deg through Meena
//! ending at 360. Each rashi has a fixed Western-zodiac equivalent used
//! for display.

use crate::angle::ensure_normalized;
use crate::error::CoreError;

/// Span of one rashi sector: 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis from Mesha to Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Rashi {
    Mesha = 0,
    Vrishabha = 1,
    Mithuna = 2,
    Karkataka = 3,
    Simha = 4,
    Kanya = 5,
    Tula = 6,
    Vrishchika = 7,
    Dhanu = 8,
    Makara = 9,
    Kumbha = 10,
    Meena = 11,
}

const RASHI_NAMES: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karkataka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrishchika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

const WESTERN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// All 12 rashis in sector order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karkataka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Transliterated name of the rashi.
    pub const fn name(self) -> &'static str {
        RASHI_NAMES[self as usize]
    }

    /// Western-zodiac equivalent name.
    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    /// 0-based sector index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Result of rashi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi.
    pub rashi: Rashi,
    /// 0-based sector index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees elapsed within the sector [0, 30).
    pub degrees_in_rashi: f64,
}

/// Classify the rashi from a sidereal longitude in degrees [0, 360).
pub fn rashi_from_longitude(lon_deg: f64) -> Result<RashiInfo, CoreError> {
    ensure_normalized(lon_deg, "rashi longitude")?;
    let rashi_index = (lon_deg / RASHI_SPAN_DEG).floor() as u8;
    Ok(RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi: lon_deg - rashi_index as f64 * RASHI_SPAN_DEG,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_mesha() {
        let info = rashi_from_longitude(0.0).unwrap();
        assert_eq!(info.rashi, Rashi::Mesha);
        assert_eq!(info.rashi_index, 0);
    }

    #[test]
    fn lon_345_is_meena() {
        let info = rashi_from_longitude(345.0).unwrap();
        assert_eq!(info.rashi, Rashi::Meena);
        assert_eq!(info.rashi_index, 11);
        assert!((info.degrees_in_rashi - 15.0).abs() < 1e-12);
    }

    #[test]
    fn western_equivalents() {
        assert_eq!(Rashi::Mesha.western_name(), "Aries");
        assert_eq!(Rashi::Makara.western_name(), "Capricorn");
        assert_eq!(Rashi::Meena.western_name(), "Pisces");
    }

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rejects_unnormalized() {
        assert!(rashi_from_longitude(360.0).is_err());
        assert!(rashi_from_longitude(-30.0).is_err());
    }
}
