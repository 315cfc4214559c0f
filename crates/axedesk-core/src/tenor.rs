//! Tenor buckets for maturity-based aggregation.
//!
//! Curve and heatmap views group instruments by coarse time-to-maturity
//! buckets rather than exact dates. [`TenorBucket::from_maturity`] performs
//! that classification against an explicit as-of date so results are
//! reproducible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A coarse time-to-maturity bucket.
///
/// The ordering follows the curve vocabulary from shortest to longest, with
/// `Perp` last. Perpetuals, instruments without a maturity date, and
/// anything beyond 30 years all land in `Perp`.
///
/// # Examples
///
/// ```
/// use axedesk_core::TenorBucket;
/// use chrono::NaiveDate;
///
/// let asof = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let maturity = NaiveDate::from_ymd_opt(2031, 1, 15).unwrap();
/// assert_eq!(TenorBucket::from_maturity(Some(maturity), asof), TenorBucket::Y5To7);
/// assert_eq!(TenorBucket::from_maturity(None, asof), TenorBucket::Perp);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum TenorBucket {
    /// Up to 1 year.
    Y0To1,
    /// 1 to 2 years.
    Y1To2,
    /// 2 to 3 years.
    Y2To3,
    /// 3 to 4 years.
    Y3To4,
    /// 4 to 5 years.
    Y4To5,
    /// 5 to 7 years.
    Y5To7,
    /// 7 to 8 years.
    Y7To8,
    /// 8 to 10 years.
    Y8To10,
    /// 10 to 15 years.
    Y10To15,
    /// 15 to 20 years.
    Y15To20,
    /// 20 to 25 years.
    Y20To25,
    /// 25 to 30 years.
    Y25To30,
    /// Perpetual, unknown maturity, or beyond 30 years.
    #[default]
    Perp,
}

impl TenorBucket {
    /// Classifies a maturity date relative to an as-of date.
    ///
    /// Years to maturity are computed as signed days divided by 365. The
    /// first bucket whose upper bound is greater than or equal to that value
    /// wins, so a date exactly 365 days out falls in `0-1Y`. A missing
    /// maturity or anything beyond 30 years maps to [`TenorBucket::Perp`].
    #[must_use]
    pub fn from_maturity(maturity: Option<NaiveDate>, asof: NaiveDate) -> Self {
        let Some(maturity) = maturity else {
            return Self::Perp;
        };

        let years = (maturity - asof).num_days() as f64 / 365.0;

        for bucket in Self::all() {
            if let Some(bound) = bucket.upper_bound_years() {
                if years <= f64::from(bound) {
                    return *bucket;
                }
            }
        }
        Self::Perp
    }

    /// Returns the bucket's upper bound in years, or `None` for `Perp`.
    #[must_use]
    pub fn upper_bound_years(&self) -> Option<u8> {
        match self {
            Self::Y0To1 => Some(1),
            Self::Y1To2 => Some(2),
            Self::Y2To3 => Some(3),
            Self::Y3To4 => Some(4),
            Self::Y4To5 => Some(5),
            Self::Y5To7 => Some(7),
            Self::Y7To8 => Some(8),
            Self::Y8To10 => Some(10),
            Self::Y10To15 => Some(15),
            Self::Y15To20 => Some(20),
            Self::Y20To25 => Some(25),
            Self::Y25To30 => Some(30),
            Self::Perp => None,
        }
    }

    /// Returns the display label for this bucket.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Y0To1 => "0-1Y",
            Self::Y1To2 => "1-2Y",
            Self::Y2To3 => "2-3Y",
            Self::Y3To4 => "3-4Y",
            Self::Y4To5 => "4-5Y",
            Self::Y5To7 => "5-7Y",
            Self::Y7To8 => "7-8Y",
            Self::Y8To10 => "8-10Y",
            Self::Y10To15 => "10-15Y",
            Self::Y15To20 => "15-20Y",
            Self::Y20To25 => "20-25Y",
            Self::Y25To30 => "25-30Y",
            Self::Perp => "PERP",
        }
    }

    /// Returns all buckets in curve order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Y0To1,
            Self::Y1To2,
            Self::Y2To3,
            Self::Y3To4,
            Self::Y4To5,
            Self::Y5To7,
            Self::Y7To8,
            Self::Y8To10,
            Self::Y10To15,
            Self::Y15To20,
            Self::Y20To25,
            Self::Y25To30,
            Self::Perp,
        ]
    }
}

impl std::fmt::Display for TenorBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asof() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    fn days_out(days: i64) -> Option<NaiveDate> {
        Some(asof() + chrono::Duration::days(days))
    }

    #[test]
    fn test_null_maturity_is_perp() {
        assert_eq!(TenorBucket::from_maturity(None, asof()), TenorBucket::Perp);
    }

    #[test]
    fn test_upper_edge_is_inclusive() {
        // Exactly 365 days out is still 0-1Y.
        assert_eq!(
            TenorBucket::from_maturity(days_out(365), asof()),
            TenorBucket::Y0To1
        );
        assert_eq!(
            TenorBucket::from_maturity(days_out(366), asof()),
            TenorBucket::Y1To2
        );
    }

    #[test]
    fn test_bucket_progression() {
        assert_eq!(
            TenorBucket::from_maturity(days_out(30), asof()),
            TenorBucket::Y0To1
        );
        assert_eq!(
            TenorBucket::from_maturity(days_out(365 * 6), asof()),
            TenorBucket::Y5To7
        );
        assert_eq!(
            TenorBucket::from_maturity(days_out(365 * 9), asof()),
            TenorBucket::Y8To10
        );
        assert_eq!(
            TenorBucket::from_maturity(days_out(365 * 22), asof()),
            TenorBucket::Y20To25
        );
    }

    #[test]
    fn test_beyond_thirty_years_is_perp() {
        assert_eq!(
            TenorBucket::from_maturity(days_out(365 * 31), asof()),
            TenorBucket::Perp
        );
    }

    #[test]
    fn test_past_maturity_lands_in_first_bucket() {
        // Matured or short paper has years <= 0, which the 0-1Y bound covers.
        assert_eq!(
            TenorBucket::from_maturity(days_out(-10), asof()),
            TenorBucket::Y0To1
        );
    }

    #[test]
    fn test_deterministic_for_fixed_asof() {
        let maturity = days_out(1234);
        let first = TenorBucket::from_maturity(maturity, asof());
        let second = TenorBucket::from_maturity(maturity, asof());
        assert_eq!(first, second);
    }

    #[test]
    fn test_vocabulary_order() {
        let all = TenorBucket::all();
        assert_eq!(all.len(), 13);
        assert_eq!(all[0].label(), "0-1Y");
        assert_eq!(all[12].label(), "PERP");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
