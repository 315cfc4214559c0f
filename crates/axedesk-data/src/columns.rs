//! Canonical column model for axe snapshots.
//!
//! Source files arrive with a mix of legacy `IA_Offer_*` and canonical
//! `AXE_Offer_*` headers, plus a handful of deprecated statistical columns.
//! Everything downstream of the reader speaks canonical names only.

/// Canonical header names.
pub mod canonical {
    /// Instrument identifier.
    pub const ISIN: &str = "ISIN";
    /// Issuer name.
    pub const ISSUER_NAME: &str = "IssuerName";
    /// Bond identifier.
    pub const BOND_ID: &str = "Bond ID";
    /// Issuer ticker.
    pub const TICKER: &str = "Ticker";
    /// Quote currency.
    pub const CURRENCY: &str = "Currency";
    /// Coupon rate.
    pub const COUPON: &str = "Coupon";
    /// Coupon type.
    pub const COUPON_TYPE: &str = "CouponType";
    /// Maturity date.
    pub const MATURITY: &str = "Maturity";
    /// Raw sector string.
    pub const SECTOR: &str = "Sector";
    /// Fitch rating string.
    pub const FITCH_RATING: &str = "FitchRating";
    /// Moody's rating string.
    pub const MOODYS_RATING: &str = "Moody's_rating";
    /// Quoting dealer.
    pub const DEALER: &str = "Dealer";
    /// Dealer offer price.
    pub const AXE_OFFER_PRICE: &str = "AXE_Offer_Price";
    /// Dealer offer yield.
    pub const AXE_OFFER_YLD: &str = "AXE_Offer_YLD";
    /// Dealer offer quantity.
    pub const AXE_OFFER_QTY: &str = "AXE_Offer_QTY";
    /// Offer spread vs benchmark.
    pub const AXE_OFFER_BMK_SPD: &str = "AXE_Offer_BMK_SPD";
    /// Offer I-spread.
    pub const AXE_OFFER_I_SPD: &str = "AXE_Offer_I-SPD";
    /// Offer Z-spread.
    pub const AXE_OFFER_Z_SPD: &str = "AXE_Offer_Z-SPD";
    /// Offer asset-swap spread.
    pub const AXE_OFFER_ASW: &str = "AXE_Offer_ASW";
    /// Secondary reference offer price, consumed by inversion correction.
    pub const STREAM_OFFER_PRICE: &str = "Stream_Offer_Price";
    /// Raw composite bid price.
    pub const TW_BID_PRICE: &str = "TW_Bid_Price";
    /// Raw composite offer price.
    pub const TW_OFFER_PRICE: &str = "TW_Offer_Price";
    /// Derived composite bid price.
    pub const COMPOSITE_BID_PRICE: &str = "Composite_Bid_Price";
    /// Derived composite offer price.
    pub const COMPOSITE_OFFER_PRICE: &str = "Composite_Offer_Price";
    /// Derived mid price.
    pub const MID_PRICE: &str = "Mid_Price";
    /// Derived offer-vs-mid spread.
    pub const AXE_MID_SPREAD: &str = "Axe_Mid_Spread";
    /// Dealer count per ISIN on best rows.
    pub const NB_DEALERS_AXE: &str = "Nb_Dealers_AXE";
    /// Winning dealer on best rows.
    pub const BEST_DEALER: &str = "Best_Dealer";
    /// Derived rating category.
    pub const RATING_CATEGORY: &str = "Rating_Category";
    /// Derived sub-sector.
    pub const SUB_SECTOR: &str = "Sub_Sector";
}

/// Legacy → canonical header renames, applied after trimming.
pub const RENAMES: &[(&str, &str)] = &[
    ("IA_Offer_Price", canonical::AXE_OFFER_PRICE),
    ("IA_Offer_YLD", canonical::AXE_OFFER_YLD),
    ("IA_Offer_QTY", canonical::AXE_OFFER_QTY),
    ("IA_Offer_BMK_SPD", canonical::AXE_OFFER_BMK_SPD),
    ("IA_Offer_I-SPD", canonical::AXE_OFFER_I_SPD),
    ("IA_Offer_Z-SPD", canonical::AXE_OFFER_Z_SPD),
    ("IA_Offer_ASW", canonical::AXE_OFFER_ASW),
];

/// Deprecated columns, ignored on read when present.
pub const DROPPED: &[&str] = &[
    "IA_Offer_BMK_SPD_zscore",
    "IA_Offer_BMK_SPD_percentile",
    "CompositeRating",
    "TW_Offer_YLD",
    "TW_Bid_YLD",
];

/// Export column order for the best-quote view.
pub const EXPORT_COLUMNS: &[&str] = &[
    canonical::ISSUER_NAME,
    canonical::BOND_ID,
    canonical::SECTOR,
    canonical::SUB_SECTOR,
    canonical::TICKER,
    canonical::ISIN,
    canonical::CURRENCY,
    canonical::COUPON,
    canonical::COUPON_TYPE,
    canonical::MATURITY,
    canonical::AXE_OFFER_PRICE,
    canonical::AXE_OFFER_YLD,
    canonical::AXE_OFFER_QTY,
    canonical::NB_DEALERS_AXE,
    canonical::BEST_DEALER,
    canonical::COMPOSITE_BID_PRICE,
    canonical::COMPOSITE_OFFER_PRICE,
    canonical::AXE_MID_SPREAD,
    canonical::AXE_OFFER_BMK_SPD,
    canonical::AXE_OFFER_Z_SPD,
    canonical::AXE_OFFER_I_SPD,
    canonical::AXE_OFFER_ASW,
    canonical::FITCH_RATING,
    canonical::MOODYS_RATING,
    canonical::RATING_CATEGORY,
];

/// Resolves a trimmed source header to its canonical name, or `None` for
/// deprecated columns.
#[must_use]
pub fn resolve_header(trimmed: &str) -> Option<&str> {
    if DROPPED.contains(&trimmed) {
        return None;
    }
    for (legacy, canonical) in RENAMES {
        if trimmed == *legacy {
            return Some(canonical);
        }
    }
    Some(trimmed)
}
