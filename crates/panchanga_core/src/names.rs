//! Localized display names for calendar entities.
//!
//! Name tables are immutable statics keyed by language and entity index.
//! Most entity families share one transliteration across languages; the
//! zodiac additionally carries per-language forms and a Western equivalent.
//! Lookups for a language with no table of its own fall back to the
//! default language rather than failing.

use crate::error::CoreError;
use crate::masa::ALL_MASAS;
use crate::nakshatra::ALL_NAKSHATRAS;
use crate::rashi::{ALL_RASHIS, Rashi};
use crate::samvatsara::ALL_SAMVATSARAS;
use crate::tithi::ALL_TITHIS;
use crate::vaara::ALL_VAARAS;
use crate::yoga::ALL_YOGAS;

/// Display language for name lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Kannada,
    Sanskrit,
}

impl Language {
    /// The fallback language used when a table has no localized form.
    pub const DEFAULT: Language = Language::English;

    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Kannada => "kn",
            Self::Sanskrit => "sa",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "EN" => Ok(Self::English),
            "kn" | "KN" => Ok(Self::Kannada),
            "sa" | "SA" => Ok(Self::Sanskrit),
            _ => Err(CoreError::InvalidIndex("unknown language code")),
        }
    }
}

// Kannada and Sanskrit usage share the classical transliterations for the
// zodiac; English pairs the transliteration with the Western name.
const RASHI_LOCAL_KN: [&str; 12] = [
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

/// Immutable name catalog for all entity families.
///
/// Constructed statically; every accessor validates its index and applies
/// the language fallback.
pub struct NameCatalog;

impl NameCatalog {
    /// Tithi name for a 0-based synodic index (0..30).
    pub fn tithi(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 30 {
            return Err(CoreError::InvalidIndex("tithi index must be 0-29"));
        }
        let name_slot = match index {
            14 => 14,
            29 => 15,
            _ => index % 15,
        };
        Ok(ALL_TITHIS[name_slot as usize].name())
    }

    /// Nakshatra name for a 0-based sector index (0..27).
    pub fn nakshatra(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 27 {
            return Err(CoreError::InvalidIndex("nakshatra index must be 0-26"));
        }
        Ok(ALL_NAKSHATRAS[index as usize].name())
    }

    /// Yoga name for a 0-based index (0..27).
    pub fn yoga(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 27 {
            return Err(CoreError::InvalidIndex("yoga index must be 0-26"));
        }
        Ok(ALL_YOGAS[index as usize].name())
    }

    /// Masa name for a 0-based calendar index (0..12).
    pub fn masa(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 12 {
            return Err(CoreError::InvalidIndex("masa index must be 0-11"));
        }
        Ok(ALL_MASAS[index as usize].name())
    }

    /// Vaara name for a Sunday-first index (0..7).
    pub fn vaara(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 7 {
            return Err(CoreError::InvalidIndex("vaara index must be 0-6"));
        }
        Ok(ALL_VAARAS[index as usize].name())
    }

    /// Samvatsara name for a 0-based cycle index (0..60).
    pub fn samvatsara(_lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 60 {
            return Err(CoreError::InvalidIndex("samvatsara index must be 0-59"));
        }
        Ok(ALL_SAMVATSARAS[index as usize].name())
    }

    /// Rashi name for a 0-based sector index (0..12), per language.
    pub fn rashi(lang: Language, index: u8) -> Result<&'static str, CoreError> {
        if index >= 12 {
            return Err(CoreError::InvalidIndex("rashi index must be 0-11"));
        }
        match lang {
            Language::Kannada | Language::Sanskrit => Ok(RASHI_LOCAL_KN[index as usize]),
            // English falls back to the shared transliteration too; the
            // Western form is available via `rashi_label`.
            Language::English => Ok(ALL_RASHIS[index as usize].name()),
        }
    }
}

/// Display label for a rashi: transliteration with Western equivalent,
/// e.g. "Mesha (Aries)".
pub fn rashi_label(lang: Language, rashi: Rashi) -> String {
    let local = NameCatalog::rashi(lang, rashi.index()).unwrap_or(rashi.name());
    format!("{} ({})", local, rashi.western_name())
}
