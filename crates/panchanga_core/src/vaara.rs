//! Vaara (weekday) determination with sunrise re-anchoring.
//!
//! The calendrical day runs from sunrise to sunrise, not midnight to
//! midnight: a moment before today's sunrise still belongs to yesterday's
//! vaara. The week begins with Ravivara (Sunday), so the ISO Monday-first
//! civil numbering is remapped after the sunrise adjustment.
//!
//! When no sunrise exists (polar day/night, or the collaborator could not
//! produce one) the civil weekday is used unchanged; this path never fails.

use panchanga_time::{LocalDateTime, WallClock};

use crate::error::CoreError;

/// The 7 vaaras from Ravivara (Sunday) to Shanivara (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Vaara {
    Ravivara = 0,
    Somavara = 1,
    Mangalavara = 2,
    Budhavara = 3,
    Guruvara = 4,
    Shukravara = 5,
    Shanivara = 6,
}

const VAARA_NAMES: [&str; 7] = [
    "Ravivara",
    "Somavara",
    "Mangalavara",
    "Budhavara",
    "Guruvara",
    "Shukravara",
    "Shanivara",
];

/// All 7 vaaras in week order (0 = Ravivara .. 6 = Shanivara).
pub const ALL_VAARAS: [Vaara; 7] = [
    Vaara::Ravivara,
    Vaara::Somavara,
    Vaara::Mangalavara,
    Vaara::Budhavara,
    Vaara::Guruvara,
    Vaara::Shukravara,
    Vaara::Shanivara,
];

impl Vaara {
    /// Transliterated name of the vaara.
    pub const fn name(self) -> &'static str {
        VAARA_NAMES[self as usize]
    }

    /// 0-based index with Ravivara first (Sunday-first numbering).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Vaara from a civil weekday in ISO numbering (0 = Monday .. 6 = Sunday).
///
/// `before_sunrise` shifts the result one day back: the calendrical day
/// has not yet begun. The remap to Sunday-first numbering happens after
/// the shift.
pub fn vaara_from_civil(weekday_monday0: u8, before_sunrise: bool) -> Result<Vaara, CoreError> {
    if weekday_monday0 > 6 {
        return Err(CoreError::InvalidIndex("civil weekday must be 0-6"));
    }
    let effective = if before_sunrise {
        (weekday_monday0 + 6) % 7
    } else {
        weekday_monday0
    };
    // ISO Monday=0 becomes Somavara=1; Sunday=6 becomes Ravivara=0.
    Ok(ALL_VAARAS[((effective + 1) % 7) as usize])
}

/// Vaara for a local moment given that day's sunrise, if any.
///
/// A missing sunrise falls back to the civil weekday at midnight
/// boundaries (no re-anchoring).
pub fn vaara_for_moment(local: &LocalDateTime, sunrise: Option<WallClock>) -> Vaara {
    let before_sunrise = sunrise.is_some_and(|rise| local.time < rise);
    let weekday = local.date.weekday_monday0();
    let effective = if before_sunrise {
        (weekday + 6) % 7
    } else {
        weekday
    };
    // weekday_monday0 is always 0-6, so the lookup cannot fail
    ALL_VAARAS[((effective + 1) % 7) as usize]
}
