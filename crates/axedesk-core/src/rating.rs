//! Credit-quality categories derived from agency ratings.
//!
//! Dealer axe feeds carry two free-form rating strings per row (Fitch and
//! Moody's). [`RatingCategory::classify`] collapses them into one of five
//! coarse categories used for filtering and reporting.

use serde::{Deserialize, Serialize};

/// Fitch-style and Moody's-style tokens that classify as investment grade.
const INVESTMENT_GRADE: &[&str] = &[
    "AAA", "AA+", "AA", "AA-", "A+", "A", "A-", "Aaa", "Aa1", "Aa2", "Aa3", "A1", "A2", "A3",
];

/// Tokens that classify as crossover (low BBB through BB).
const CROSSOVER: &[&str] = &[
    "BBB+", "BBB", "BBB-", "Baa1", "Baa2", "Baa3", "BB+", "BB", "BB-",
];

/// Tokens that classify as high yield.
const HIGH_YIELD: &[&str] = &["B+", "B", "B-", "B1", "B2", "B3"];

/// Tokens that classify as junk.
const JUNK: &[&str] = &[
    "CCC+", "CCC", "CCC-", "CC", "C", "Ca", "Caa1", "Caa2", "Caa3",
];

/// Coarse credit-quality category for an instrument.
///
/// The ordering runs from highest quality to lowest, with `NotRated` last;
/// it matches the display order of the original reports.
///
/// # Examples
///
/// ```
/// use axedesk_core::RatingCategory;
///
/// let cat = RatingCategory::classify(Some("AA-"), Some("Aa3"));
/// assert_eq!(cat, RatingCategory::InvestmentGrade);
/// assert!(RatingCategory::InvestmentGrade < RatingCategory::HighYield);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum RatingCategory {
    /// AAA through A- (and the Moody's equivalents).
    InvestmentGrade,
    /// BBB+ through BB-.
    Crossover,
    /// B+ through B-.
    HighYield,
    /// CCC+ and below.
    Junk,
    /// No usable rating, or an unrecognized code.
    #[default]
    NotRated,
}

impl RatingCategory {
    /// Classifies a (Fitch, Moody's) rating pair into a category.
    ///
    /// The Fitch rating is preferred when present, non-empty after trimming,
    /// and not the literal string "nan" (feeds serialize missing cells that
    /// way); otherwise the Moody's rating is used under the same test. If
    /// neither is usable the result is [`RatingCategory::NotRated`].
    ///
    /// Total over any string input: unrecognized codes classify as
    /// [`RatingCategory::NotRated`].
    ///
    /// The chosen string is uppercased before the token-set lookup while the
    /// sets keep their mixed-case Moody's tokens, so codes like `Aa1` or
    /// `Baa2` only match when they coincide with an all-caps token (A1, A2,
    /// A3, B1, B2, B3, C do; the rest classify as Not Rated). Kept as-is for
    /// backward compatibility with existing categorizations.
    #[must_use]
    pub fn classify(fitch: Option<&str>, moodys: Option<&str>) -> Self {
        let chosen = usable(fitch).or_else(|| usable(moodys));
        let Some(rating) = chosen else {
            return Self::NotRated;
        };

        let rating = rating.trim().to_uppercase();

        if INVESTMENT_GRADE.contains(&rating.as_str()) {
            Self::InvestmentGrade
        } else if CROSSOVER.contains(&rating.as_str()) {
            Self::Crossover
        } else if HIGH_YIELD.contains(&rating.as_str()) {
            Self::HighYield
        } else if JUNK.contains(&rating.as_str()) {
            Self::Junk
        } else {
            Self::NotRated
        }
    }

    /// Returns the display label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentGrade => "Investment Grade",
            Self::Crossover => "Crossover",
            Self::HighYield => "High Yield",
            Self::Junk => "Junk",
            Self::NotRated => "Not Rated",
        }
    }

    /// Parses a display label back into a category.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// Returns all categories in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::InvestmentGrade,
            Self::Crossover,
            Self::HighYield,
            Self::Junk,
            Self::NotRated,
        ]
    }
}

impl std::fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the rating if it is present, non-empty, and not a serialized NaN.
fn usable(rating: Option<&str>) -> Option<&str> {
    rating
        .map(str::trim)
        .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case("nan"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fitch_preferred_over_moodys() {
        let cat = RatingCategory::classify(Some("BBB"), Some("AAA"));
        assert_eq!(cat, RatingCategory::Crossover);
    }

    #[test]
    fn test_fallback_to_moodys() {
        assert_eq!(
            RatingCategory::classify(None, Some("CCC")),
            RatingCategory::Junk
        );
        assert_eq!(
            RatingCategory::classify(Some("nan"), Some("BB+")),
            RatingCategory::Crossover
        );
        assert_eq!(
            RatingCategory::classify(Some("  "), Some("B-")),
            RatingCategory::HighYield
        );
    }

    #[test]
    fn test_not_rated_when_neither_usable() {
        assert_eq!(
            RatingCategory::classify(None, None),
            RatingCategory::NotRated
        );
        assert_eq!(
            RatingCategory::classify(Some("NaN"), Some("")),
            RatingCategory::NotRated
        );
    }

    #[test]
    fn test_fitch_scale() {
        assert_eq!(
            RatingCategory::classify(Some("AAA"), None),
            RatingCategory::InvestmentGrade
        );
        assert_eq!(
            RatingCategory::classify(Some("a-"), None),
            RatingCategory::InvestmentGrade
        );
        assert_eq!(
            RatingCategory::classify(Some("BBB-"), None),
            RatingCategory::Crossover
        );
        assert_eq!(
            RatingCategory::classify(Some("bb"), None),
            RatingCategory::Crossover
        );
        assert_eq!(
            RatingCategory::classify(Some("B+"), None),
            RatingCategory::HighYield
        );
        assert_eq!(
            RatingCategory::classify(Some("CC"), None),
            RatingCategory::Junk
        );
        assert_eq!(
            RatingCategory::classify(Some("D"), None),
            RatingCategory::NotRated
        );
    }

    #[test]
    fn test_moodys_mixed_case_tokens_do_not_match() {
        // Uppercasing turns Aa1 into AA1, which is in no token set. Only the
        // all-caps coincidences on the Moody's scale land in a category.
        assert_eq!(
            RatingCategory::classify(None, Some("Aa1")),
            RatingCategory::NotRated
        );
        assert_eq!(
            RatingCategory::classify(None, Some("Baa2")),
            RatingCategory::NotRated
        );
        assert_eq!(
            RatingCategory::classify(None, Some("Caa1")),
            RatingCategory::NotRated
        );
        assert_eq!(
            RatingCategory::classify(None, Some("A1")),
            RatingCategory::InvestmentGrade
        );
        assert_eq!(
            RatingCategory::classify(None, Some("B2")),
            RatingCategory::HighYield
        );
        assert_eq!(
            RatingCategory::classify(None, Some("C")),
            RatingCategory::Junk
        );
    }

    #[test]
    fn test_label_round_trip() {
        for cat in RatingCategory::all() {
            assert_eq!(RatingCategory::from_label(cat.label()), Some(*cat));
        }
        assert_eq!(RatingCategory::from_label("Prime"), None);
    }

    #[test]
    fn test_display_order() {
        let all = RatingCategory::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].label(), "Investment Grade");
        assert_eq!(all[4].label(), "Not Rated");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serde() {
        let cat = RatingCategory::Crossover;
        let json = serde_json::to_string(&cat).unwrap();
        let parsed: RatingCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cat);
    }

    proptest! {
        #[test]
        fn classify_is_total(fitch in ".{0,12}", moodys in ".{0,12}") {
            let cat = RatingCategory::classify(Some(&fitch), Some(&moodys));
            prop_assert!(RatingCategory::all().contains(&cat));
        }
    }
}
