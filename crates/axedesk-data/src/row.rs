//! Row types for the axe data model.
//!
//! Every source-derived field is optional: snapshot files are loosely typed
//! and columns come and go, so presence checks happen once at the type level
//! instead of being scattered through the pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use axedesk_core::RatingCategory;

/// One dealer's offer on one instrument, as read from a snapshot record
/// after column harmonization and before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuoteRow {
    /// Instrument identifier.
    pub isin: Option<String>,
    /// Issuer name.
    pub issuer_name: Option<String>,
    /// Bond identifier.
    pub bond_id: Option<String>,
    /// Issuer ticker.
    pub ticker: Option<String>,
    /// Quote currency.
    pub currency: Option<String>,
    /// Coupon rate.
    pub coupon: Option<Decimal>,
    /// Coupon type (fixed, floating, ...).
    pub coupon_type: Option<String>,
    /// Maturity cell, unparsed.
    pub maturity: Option<String>,
    /// Raw sector string.
    pub sector: Option<String>,
    /// Fitch rating string.
    pub fitch_rating: Option<String>,
    /// Moody's rating string.
    pub moodys_rating: Option<String>,
    /// Quoting dealer.
    pub dealer: Option<String>,
    /// Dealer offer price.
    pub axe_offer_price: Option<Decimal>,
    /// Dealer offer yield, as stored by the feed (a fraction).
    pub axe_offer_yld: Option<Decimal>,
    /// Dealer offer quantity.
    pub axe_offer_qty: Option<Decimal>,
    /// Offer spread vs benchmark.
    pub axe_offer_bmk_spd: Option<Decimal>,
    /// Offer I-spread.
    pub axe_offer_i_spd: Option<Decimal>,
    /// Offer Z-spread.
    pub axe_offer_z_spd: Option<Decimal>,
    /// Offer asset-swap spread.
    pub axe_offer_asw: Option<Decimal>,
    /// Secondary reference offer price; consumed by inversion correction.
    pub stream_offer_price: Option<Decimal>,
    /// Raw composite bid price; consumed by mid derivation.
    pub tw_bid_price: Option<Decimal>,
    /// Raw composite offer price; consumed by mid derivation.
    pub tw_offer_price: Option<Decimal>,
}

/// A fully normalized quote row.
///
/// Price and yield are corrected for unit/axis inversion, the yield is a
/// percentage with implausible values nulled, composite mid and offer-vs-mid
/// spread are derived, and the sector/rating taxonomy is attached. The raw
/// reference fields consumed during normalization do not appear here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Instrument identifier.
    pub isin: Option<String>,
    /// Issuer name.
    pub issuer_name: Option<String>,
    /// Bond identifier.
    pub bond_id: Option<String>,
    /// Issuer ticker.
    pub ticker: Option<String>,
    /// Quote currency.
    pub currency: Option<String>,
    /// Coupon rate.
    pub coupon: Option<Decimal>,
    /// Coupon type.
    pub coupon_type: Option<String>,
    /// Parsed maturity date.
    pub maturity: Option<NaiveDate>,
    /// Top-level sector code.
    pub sector: Option<String>,
    /// Sub-sector (the raw sector string verbatim).
    pub sub_sector: Option<String>,
    /// Fitch rating string.
    pub fitch_rating: Option<String>,
    /// Moody's rating string.
    pub moodys_rating: Option<String>,
    /// Derived credit-quality category.
    pub rating_category: RatingCategory,
    /// Quoting dealer.
    pub dealer: Option<String>,
    /// Corrected offer price.
    pub axe_offer_price: Option<Decimal>,
    /// Corrected offer yield, in percent.
    pub axe_offer_yld: Option<Decimal>,
    /// Offer quantity.
    pub axe_offer_qty: Option<Decimal>,
    /// Offer spread vs benchmark.
    pub axe_offer_bmk_spd: Option<Decimal>,
    /// Offer I-spread.
    pub axe_offer_i_spd: Option<Decimal>,
    /// Offer Z-spread.
    pub axe_offer_z_spd: Option<Decimal>,
    /// Offer asset-swap spread.
    pub axe_offer_asw: Option<Decimal>,
    /// Composite bid price.
    pub composite_bid_price: Option<Decimal>,
    /// Composite offer price.
    pub composite_offer_price: Option<Decimal>,
    /// Mid of the composite pair.
    pub mid_price: Option<Decimal>,
    /// Offer price minus mid price.
    pub axe_mid_spread: Option<Decimal>,
}

/// The single best quote for one ISIN: the dealer row with the greatest
/// offer yield, annotated with the group's dealer count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestQuoteRow {
    /// The winning dealer's normalized quote.
    #[serde(flatten)]
    pub quote: QuoteRow,
    /// Number of dealers quoting this ISIN.
    pub nb_dealers: u32,
    /// The winning dealer.
    pub best_dealer: Option<String>,
}
