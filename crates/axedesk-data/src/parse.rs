//! Lenient field parsing for dirty snapshot cells.
//!
//! Source files interleave numbers with placeholders ("N/A", "-", ""),
//! thousands separators, and several date spellings. Parsers here never
//! fail: anything unusable becomes `None` and the row is kept.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Date formats tried in order. Slash dates are day-first; the snapshots
/// come from a European feed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%Y%m%d"];

/// Parses a cell to a `Decimal`, or `None` when it is not numeric.
///
/// Trims whitespace, strips thousands separators, and falls back to f64
/// parsing for scientific notation.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Quantity columns occasionally carry thousands separators.
    let cleaned = trimmed.replace(',', "");

    Decimal::from_str(&cleaned).ok().or_else(|| {
        f64::from_str(&cleaned)
            .ok()
            .and_then(|f| Decimal::try_from(f).ok())
    })
}

/// Parses a cell to a calendar date, or `None` when unparseable.
///
/// Tries the plain date formats first, then an ISO datetime (feeds sometimes
/// stamp maturities with a midnight time component).
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.date())
        .ok()
}

/// Returns the trimmed cell, or `None` when empty.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("97.8"), Some(dec!(97.8)));
        assert_eq!(parse_decimal(" -12.5 "), Some(dec!(-12.5)));
        assert_eq!(parse_decimal("0.031"), Some(dec!(0.031)));
    }

    #[test]
    fn test_parse_decimal_separators_and_notation() {
        assert_eq!(parse_decimal("1,500,000"), Some(dec!(1500000)));
        assert_eq!(parse_decimal("1.5e6"), Some(dec!(1500000)));
    }

    #[test]
    fn test_parse_decimal_garbage_is_none() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("N/A"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("12.3.4"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2031, 1, 15).unwrap();
        assert_eq!(parse_date("2031-01-15"), Some(expected));
        assert_eq!(parse_date("15/01/2031"), Some(expected));
        assert_eq!(parse_date("20310115"), Some(expected));
        assert_eq!(parse_date("2031-01-15 00:00:00"), Some(expected));
    }

    #[test]
    fn test_parse_date_garbage_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("PERP"), None);
        assert_eq!(parse_date("2031-13-40"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  BNP  "), Some("BNP".to_string()));
        assert_eq!(non_empty("   "), None);
    }
}
