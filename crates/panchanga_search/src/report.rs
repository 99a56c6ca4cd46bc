//! Plain-text rendering of a snapshot or search result.

use std::fmt::Write as _;

use panchanga_core::{Language, NameCatalog};

use crate::error::SearchError;
use crate::recurrence::RecurrenceResult;
use crate::snapshot::PanchangaSnapshot;

const RULE_HEAVY: &str = "========================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Render one snapshot as an aligned banner report.
pub fn format_snapshot(snap: &PanchangaSnapshot, lang: Language) -> Result<String, SearchError> {
    let mut out = String::new();
    let _ = writeln!(out, "{:^40}", "PANCHANGA REPORT");
    out.push_str(RULE_HEAVY);
    out.push('\n');
    let _ = writeln!(
        out,
        "Input Date/Time : {} {} ({})",
        snap.local.date, snap.local.time, snap.location.timezone_id
    );
    let _ = writeln!(out, "Location        : {}", snap.location.address);
    match snap.sunrise {
        Some(rise) => {
            let _ = writeln!(out, "Sunrise         : {rise}");
        }
        None => {
            let _ = writeln!(out, "Sunrise         : none");
        }
    }
    match snap.sunset {
        Some(set) => {
            let _ = writeln!(out, "Sunset          : {set}");
        }
        None => {
            let _ = writeln!(out, "Sunset          : none");
        }
    }
    out.push_str(RULE_LIGHT);
    out.push('\n');
    let _ = writeln!(
        out,
        "Samvatsara      : {} (#{} of 60)",
        NameCatalog::samvatsara(lang, snap.samvatsara_order - 1)?,
        snap.samvatsara_order
    );
    let _ = writeln!(out, "Saka Varsha     : {}", snap.saka_year);
    let _ = writeln!(
        out,
        "Masa (Month)    : {}",
        NameCatalog::masa(lang, snap.masa.index())?
    );
    let _ = writeln!(out, "Paksha          : {}", snap.tithi.paksha.name());
    let _ = writeln!(
        out,
        "Tithi           : {}",
        NameCatalog::tithi(lang, snap.tithi.tithi_index)?
    );
    let _ = writeln!(
        out,
        "Vara (Weekday)  : {}",
        NameCatalog::vaara(lang, snap.vaara.index())?
    );
    let _ = writeln!(
        out,
        "Nakshatra       : {} (Pada {})",
        NameCatalog::nakshatra(lang, snap.nakshatra.nakshatra_index)?,
        snap.nakshatra.pada
    );
    let _ = writeln!(
        out,
        "Yoga            : {}",
        NameCatalog::yoga(lang, snap.yoga.yoga_index)?
    );
    let _ = writeln!(
        out,
        "Karana          : {} (#{} of 60)",
        snap.karana.karana.name(),
        snap.karana.ordinal
    );
    out.push_str(RULE_HEAVY);
    out.push('\n');
    Ok(out)
}

/// Render a recurrence search result: the target triple, the full
/// banner report for every matched day, and the years that produced no
/// match.
pub fn format_recurrences(result: &RecurrenceResult, lang: Language) -> Result<String, SearchError> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Searching for {} {} {}",
        NameCatalog::masa(lang, result.target.masa.index())?,
        result.target.tithi.paksha.name(),
        NameCatalog::tithi(lang, result.target.tithi.tithi_index)?
    );
    for occurrence in &result.occurrences {
        let snap = &occurrence.snapshot;
        let _ = writeln!(
            out,
            "\nMatch in {}: {}  {}",
            occurrence.year,
            snap.local.date,
            NameCatalog::vaara(lang, snap.vaara.index())?
        );
        out.push_str(&format_snapshot(snap, lang)?);
    }
    if !result.gap_years.is_empty() {
        out.push('\n');
        out.push_str(RULE_LIGHT);
        out.push('\n');
        for year in &result.gap_years {
            let _ = writeln!(out, "{year}  no match in window");
        }
    }
    Ok(out)
}
