//! Nakshatra (lunar asterism) classification from the Moon's longitude.
//!
//! The ecliptic is divided into 27 equal sectors of 13 deg 20'
//! (13.3333... deg) each, from Ashwini at 0 deg to Revati ending at 360.
//! Each nakshatra subdivides into 4 padas of 3 deg 20'.
//!
//! Every nakshatra carries a fixed anchor star (yogatara), independent of
//! display language.

use crate::angle::ensure_normalized;
use crate::error::CoreError;

/// Span of one nakshatra sector: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra, 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Nakshatra {
    Ashwini = 0,
    Bharani = 1,
    Krittika = 2,
    Rohini = 3,
    Mrigashira = 4,
    Ardra = 5,
    Punarvasu = 6,
    Pushya = 7,
    Ashlesha = 8,
    Magha = 9,
    PurvaPhalguni = 10,
    UttaraPhalguni = 11,
    Hasta = 12,
    Chitra = 13,
    Swati = 14,
    Vishakha = 15,
    Anuradha = 16,
    Jyeshtha = 17,
    Mula = 18,
    PurvaAshadha = 19,
    UttaraAshadha = 20,
    Shravana = 21,
    Dhanishtha = 22,
    Shatabhisha = 23,
    PurvaBhadrapada = 24,
    UttaraBhadrapada = 25,
    Revati = 26,
}

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Anchor star (yogatara) of each nakshatra sector, in sector order.
const JUNCTION_STARS: [&str; 27] = [
    "Beta Arietis",
    "41 Arietis",
    "Alcyone (Pleiades)",
    "Aldebaran",
    "Lambda Orionis",
    "Betelgeuse",
    "Pollux",
    "Delta Cancri",
    "Epsilon Hydrae",
    "Regulus",
    "Delta Leonis",
    "Beta Leonis",
    "Delta Corvi",
    "Spica",
    "Arcturus",
    "Alpha Librae",
    "Delta Scorpii",
    "Antares",
    "Lambda Scorpii",
    "Delta Sagittarii",
    "Sigma Sagittarii",
    "Altair",
    "Beta Delphini",
    "Lambda Aquarii",
    "Alpha Pegasi",
    "Gamma Pegasi",
    "Zeta Piscium",
];

/// All 27 nakshatras in sector order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Transliterated name of the nakshatra.
    pub const fn name(self) -> &'static str {
        NAKSHATRA_NAMES[self as usize]
    }

    /// 0-based sector index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fixed anchor star of this nakshatra's sector.
    pub const fn junction_star(self) -> &'static str {
        JUNCTION_STARS[self as usize]
    }
}

/// Result of nakshatra classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based sector index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees elapsed within the nakshatra sector [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Degrees elapsed within the pada [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Classify nakshatra and pada from the Moon's sidereal longitude [0, 360).
pub fn nakshatra_from_longitude(moon_lon_deg: f64) -> Result<NakshatraInfo, CoreError> {
    ensure_normalized(moon_lon_deg, "nakshatra longitude")?;
    let nakshatra_index = (moon_lon_deg / NAKSHATRA_SPAN_DEG).floor() as u8;
    let degrees_in_nakshatra = moon_lon_deg - nakshatra_index as f64 * NAKSHATRA_SPAN_DEG;
    let pada_index = (degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8;
    let degrees_in_pada = degrees_in_nakshatra - pada_index as f64 * PADA_SPAN_DEG;
    Ok(NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nakshatra_index as usize],
        nakshatra_index,
        pada: pada_index + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_ashwini_pada_one() {
        let info = nakshatra_from_longitude(0.0).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn moon_at_250_is_mula() {
        // 250 / 13.333 = 18.75 -> Mula, fourth pada
        let info = nakshatra_from_longitude(250.0).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Mula);
        assert_eq!(info.nakshatra_index, 18);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn last_degree_is_revati() {
        let info = nakshatra_from_longitude(359.999).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        // Exactly one pada span into Ashwini -> pada 2
        let info = nakshatra_from_longitude(PADA_SPAN_DEG).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 2);
        assert!(info.degrees_in_pada.abs() < 1e-9);
    }

    #[test]
    fn index_and_pada_ranges() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let info = nakshatra_from_longitude(deg).unwrap();
            assert!(info.nakshatra_index < 27, "deg={deg}");
            assert!((1..=4).contains(&info.pada), "deg={deg}");
            deg += 0.1;
        }
    }

    #[test]
    fn junction_stars_fixed() {
        assert_eq!(Nakshatra::Ashwini.junction_star(), "Beta Arietis");
        assert_eq!(Nakshatra::Chitra.junction_star(), "Spica");
        assert_eq!(Nakshatra::Revati.junction_star(), "Zeta Piscium");
    }

    #[test]
    fn names_and_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn rejects_unnormalized() {
        assert!(nakshatra_from_longitude(360.0).is_err());
        assert!(nakshatra_from_longitude(-1.0).is_err());
        assert!(nakshatra_from_longitude(f64::NAN).is_err());
    }
}
