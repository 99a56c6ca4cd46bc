//! Karana (half-tithi) classification from Moon-Sun elongation.
//!
//! The synodic month holds 60 karanas of 6 degrees of elongation each,
//! ordinals 1-60. The primary output is the 1-based ordinal; the
//! traditional naming assigns the four fixed karanas to specific ordinals
//! (1 = Kimstughna, 58-60 = Shakuni, Chatushpada, Naga) while ordinals
//! 2-57 cycle through the seven movable karanas Bava..Vishti.
//!
//! Two karanas tile each tithi, so floor((ordinal-1)/2) always equals the
//! tithi index derived from the same elongation.

use crate::angle::ensure_normalized;
use crate::error::CoreError;

/// Elongation span of one karana: 6 degrees (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The eleven karana names: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// The seven movable karanas in cycle order.
const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Transliterated name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Whether this karana recurs eight times per month (movable) or
    /// occurs exactly once (fixed).
    pub const fn is_movable(self) -> bool {
        !matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

/// Result of karana classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// 1-based ordinal in the synodic month (1..=60).
    pub ordinal: u8,
    /// Traditional name for this ordinal.
    pub karana: Karana,
}

/// Karana ordinal (1..=60) from Moon-Sun elongation in degrees [0, 360).
pub fn karana_ordinal_from_elongation(elongation_deg: f64) -> Result<u8, CoreError> {
    ensure_normalized(elongation_deg, "karana elongation")?;
    Ok((elongation_deg / KARANA_SEGMENT_DEG).floor() as u8 + 1)
}

/// Traditional karana name for a 1-based ordinal.
pub fn karana_from_ordinal(ordinal: u8) -> Result<Karana, CoreError> {
    match ordinal {
        1 => Ok(Karana::Kimstughna),
        2..=57 => Ok(MOVABLE_KARANAS[((ordinal - 2) % 7) as usize]),
        58 => Ok(Karana::Shakuni),
        59 => Ok(Karana::Chatushpada),
        60 => Ok(Karana::Naga),
        _ => Err(CoreError::InvalidIndex("karana ordinal must be 1-60")),
    }
}

/// Classify the karana (ordinal and name) from Moon-Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> Result<KaranaInfo, CoreError> {
    let ordinal = karana_ordinal_from_elongation(elongation_deg)?;
    let karana = karana_from_ordinal(ordinal)?;
    Ok(KaranaInfo { ordinal, karana })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tithi::tithi_from_elongation;

    #[test]
    fn first_half_tithi_is_kimstughna() {
        let info = karana_from_elongation(3.0).unwrap();
        assert_eq!(info.ordinal, 1);
        assert_eq!(info.karana, Karana::Kimstughna);
    }

    #[test]
    fn second_ordinal_is_bava() {
        let info = karana_from_elongation(6.0).unwrap();
        assert_eq!(info.ordinal, 2);
        assert_eq!(info.karana, Karana::Bava);
    }

    #[test]
    fn elongation_240_is_ordinal_41() {
        let info = karana_from_elongation(240.0).unwrap();
        assert_eq!(info.ordinal, 41);
        // (41-2) % 7 = 4 -> Garaja
        assert_eq!(info.karana, Karana::Garaja);
    }

    #[test]
    fn fixed_tail() {
        assert_eq!(karana_from_ordinal(58).unwrap(), Karana::Shakuni);
        assert_eq!(karana_from_ordinal(59).unwrap(), Karana::Chatushpada);
        assert_eq!(karana_from_ordinal(60).unwrap(), Karana::Naga);
    }

    #[test]
    fn ordinal_range() {
        let lo = karana_ordinal_from_elongation(0.0).unwrap();
        let hi = karana_ordinal_from_elongation(359.999).unwrap();
        assert_eq!(lo, 1);
        assert_eq!(hi, 60);
    }

    #[test]
    fn two_karanas_per_tithi() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let k = karana_ordinal_from_elongation(deg).unwrap();
            let t = tithi_from_elongation(deg).unwrap();
            assert_eq!((k - 1) / 2, t.tithi_index, "deg={deg}");
            deg += 0.5;
        }
    }

    #[test]
    fn rejects_bad_ordinals() {
        assert!(karana_from_ordinal(0).is_err());
        assert!(karana_from_ordinal(61).is_err());
    }

    #[test]
    fn rejects_unnormalized() {
        assert!(karana_ordinal_from_elongation(360.0).is_err());
        assert!(karana_ordinal_from_elongation(f64::NAN).is_err());
    }
}
