//! Yoga classification from the summed Sun and Moon longitudes.
//!
//! The sum (Sun + Moon) mod 360 is divided into the same 27 sectors of
//! 13 deg 20' used by the nakshatras, named Vishkumbha through Vaidhriti.

use crate::angle::ensure_normalized;
use crate::error::CoreError;

/// Span of one yoga sector: 360/27 = 13.3333... degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Yoga {
    Vishkumbha = 0,
    Preeti = 1,
    Ayushman = 2,
    Saubhagya = 3,
    Shobhana = 4,
    Atiganda = 5,
    Sukarma = 6,
    Dhriti = 7,
    Shoola = 8,
    Ganda = 9,
    Vriddhi = 10,
    Dhruva = 11,
    Vyaghata = 12,
    Harshana = 13,
    Vajra = 14,
    Siddhi = 15,
    Vyatipata = 16,
    Variyan = 17,
    Parigha = 18,
    Shiva = 19,
    Siddha = 20,
    Sadhya = 21,
    Shubha = 22,
    Shukla = 23,
    Brahma = 24,
    Indra = 25,
    Vaidhriti = 26,
}

const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha",
    "Preeti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// All 27 yogas in order (0 = Vishkumbha .. 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Preeti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shoola,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// Transliterated name of the yoga.
    pub const fn name(self) -> &'static str {
        YOGA_NAMES[self as usize]
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Result of yoga classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based index (0 = Vishkumbha).
    pub yoga_index: u8,
}

/// Classify the yoga from (Sun + Moon) longitude sum mod 360, in [0, 360).
pub fn yoga_from_sum(sum_deg: f64) -> Result<YogaInfo, CoreError> {
    ensure_normalized(sum_deg, "yoga longitude sum")?;
    let yoga_index = (sum_deg / YOGA_SEGMENT_DEG).floor() as u8;
    Ok(YogaInfo {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_vishkumbha() {
        let info = yoga_from_sum(0.0).unwrap();
        assert_eq!(info.yoga, Yoga::Vishkumbha);
        assert_eq!(info.yoga_index, 0);
    }

    #[test]
    fn sum_260_is_shiva() {
        // 260 / 13.333 = 19.5 -> index 19
        let info = yoga_from_sum(260.0).unwrap();
        assert_eq!(info.yoga, Yoga::Shiva);
        assert_eq!(info.yoga_index, 19);
    }

    #[test]
    fn last_degree_is_vaidhriti() {
        let info = yoga_from_sum(359.999).unwrap();
        assert_eq!(info.yoga, Yoga::Vaidhriti);
        assert_eq!(info.yoga_index, 26);
    }

    #[test]
    fn indices_sequential() {
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
        }
    }

    #[test]
    fn rejects_unnormalized() {
        assert!(yoga_from_sum(360.0).is_err());
        assert!(yoga_from_sum(-5.0).is_err());
        assert!(yoga_from_sum(f64::INFINITY).is_err());
    }
}
