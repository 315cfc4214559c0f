//! Sector taxonomy derived from raw sector strings.
//!
//! Axe feeds carry one free-form sector string per row (e.g. "HY Retail",
//! "IG CoCo Banks"). The full string is kept as the sub-sector; the
//! top-level sector is the leading token, with an override that splits
//! investment-grade rows into financials and corporates.

use serde::{Deserialize, Serialize};

/// Sub-sector markers that classify an "IG…" string as IG financials.
const IG_FIN_MARKERS: &[&str] = &["CoCo", "Lower Tier 2", "Lower T2", "SnBnk/Fin", "Upper T2/T1"];

/// A derived sector classification: top-level sector plus verbatim sub-sector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorClass {
    /// Top-level sector code (e.g. "HY", "IG FIN", "IG CORPO").
    pub sector: String,
    /// The raw sector string, verbatim.
    pub sub_sector: String,
}

/// Derives the `{sector, sub_sector}` pair from a raw sector string.
///
/// The sub-sector is the input verbatim. The sector is the token before the
/// first space or hyphen (the whole string when no separator exists, empty
/// when the string starts with one). Strings starting with "IG" override to
/// "IG FIN" when any financial sub-sector marker is present, else to
/// "IG CORPO".
///
/// Total over any input; never fails.
///
/// # Examples
///
/// ```
/// use axedesk_core::derive_sector;
///
/// assert_eq!(derive_sector("HY Retail").sector, "HY");
/// assert_eq!(derive_sector("IG CoCo Banks").sector, "IG FIN");
/// assert_eq!(derive_sector("IG Industrials").sector, "IG CORPO");
/// ```
#[must_use]
pub fn derive_sector(raw: &str) -> SectorClass {
    let sector = if raw.starts_with("IG") {
        if IG_FIN_MARKERS.iter().any(|m| raw.contains(m)) {
            "IG FIN".to_string()
        } else {
            "IG CORPO".to_string()
        }
    } else {
        raw.split([' ', '-']).next().unwrap_or("").to_string()
    };

    SectorClass {
        sector,
        sub_sector: raw.to_string(),
    }
}
