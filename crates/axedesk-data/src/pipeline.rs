//! The quote normalization pipeline.
//!
//! Runs once per snapshot load, in a fixed step order:
//!
//! 1. Drop rows without an offer price (the only row-level drop)
//! 2. Correct price/yield channel inversions against the reference price
//! 3. Scale the yield to a percentage
//! 4. Null implausible price/yield combinations
//! 5. Derive composite mid and offer-vs-mid spread
//! 6. Parse maturities, split sectors, classify ratings
//! 7. Snapshot the full multi-dealer table
//! 8. Select the best dealer per ISIN and round the surviving rows
//!
//! Later steps null fields rather than drop rows, so one bad cell never
//! costs a quote.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info};

use axedesk_core::{derive_sector, RatingCategory};

use crate::parse::parse_date;
use crate::row::{BestQuoteRow, QuoteRow, RawQuoteRow};
use crate::tables::AxeTables;

/// Gap between the offer price and the reference price beyond which the
/// price/yield channels are treated as transposed.
const INVERSION_GAP: Decimal = dec!(10);

/// Stand-in for a missing yield during best-dealer comparison; loses to any
/// real quote.
const NULL_YIELD_SENTINEL: Decimal = dec!(-9999);

/// Runs the full pipeline over one snapshot's raw rows.
///
/// Returns the session tables: the full multi-dealer table and the
/// best-quote-per-ISIN table.
#[must_use]
pub fn run(rows: Vec<RawQuoteRow>, snapshot_name: impl Into<String>) -> AxeTables {
    let full = normalize(rows);
    let mut best = select_best(&full);
    for row in &mut best {
        round_best_row(row);
    }

    info!(
        full_rows = full.len(),
        best_rows = best.len(),
        "pipeline complete"
    );

    AxeTables::new(snapshot_name, full, best)
}

/// Normalizes raw rows: completeness filter plus per-row correction and
/// enrichment. Output order follows input order.
#[must_use]
pub fn normalize(rows: Vec<RawQuoteRow>) -> Vec<QuoteRow> {
    let total = rows.len();
    let normalized: Vec<QuoteRow> = rows
        .into_iter()
        .filter(|row| row.axe_offer_price.is_some())
        .map(normalize_row)
        .collect();

    debug!(
        input_rows = total,
        dropped = total - normalized.len(),
        "normalized snapshot rows"
    );

    normalized
}

fn normalize_row(raw: RawQuoteRow) -> QuoteRow {
    let (price, yld) = correct_inversion(
        raw.axe_offer_price,
        raw.axe_offer_yld,
        raw.stream_offer_price,
    );

    // The feed stores yields as fractions.
    let yld = yld.map(|y| y.abs() * dec!(100));
    let yld = suppress_outlier_yield(price, yld);

    let composite_bid_price = raw.tw_bid_price;
    let composite_offer_price = raw.tw_offer_price;
    let mid_price = match (composite_bid_price, composite_offer_price) {
        (Some(bid), Some(offer)) => Some((bid + offer) / dec!(2)),
        _ => None,
    };
    let axe_mid_spread = match (price, mid_price) {
        (Some(p), Some(m)) => Some(p - m),
        _ => None,
    };

    let maturity = raw.maturity.as_deref().and_then(parse_date);
    let sector_class = raw.sector.as_deref().map(derive_sector);
    let rating_category =
        RatingCategory::classify(raw.fitch_rating.as_deref(), raw.moodys_rating.as_deref());

    QuoteRow {
        isin: raw.isin,
        issuer_name: raw.issuer_name,
        bond_id: raw.bond_id,
        ticker: raw.ticker,
        currency: raw.currency,
        coupon: raw.coupon,
        coupon_type: raw.coupon_type,
        maturity,
        sector: sector_class.as_ref().map(|c| c.sector.clone()),
        sub_sector: sector_class.map(|c| c.sub_sector),
        fitch_rating: raw.fitch_rating,
        moodys_rating: raw.moodys_rating,
        rating_category,
        dealer: raw.dealer,
        axe_offer_price: price,
        axe_offer_yld: yld,
        axe_offer_qty: raw.axe_offer_qty,
        axe_offer_bmk_spd: raw.axe_offer_bmk_spd,
        axe_offer_i_spd: raw.axe_offer_i_spd,
        axe_offer_z_spd: raw.axe_offer_z_spd,
        axe_offer_asw: raw.axe_offer_asw,
        composite_bid_price,
        composite_offer_price,
        mid_price,
        axe_mid_spread,
    }
}

/// Detects and repairs transposed price/yield channels.
///
/// Upstream occasionally writes the yield (in percent) into the price
/// channel and the price (divided by 100) into the yield channel. When the
/// offer price sits more than [`INVERSION_GAP`] away from the reference
/// price and both channels are populated, the pair is swapped back:
/// price = yield x 100, yield = old price / 100. Without a reference price
/// the row passes through untouched.
fn correct_inversion(
    price: Option<Decimal>,
    yld: Option<Decimal>,
    reference: Option<Decimal>,
) -> (Option<Decimal>, Option<Decimal>) {
    if let (Some(p), Some(y), Some(r)) = (price, yld, reference) {
        if (p - r).abs() > INVERSION_GAP {
            return (Some(y * dec!(100)), Some(p / dec!(100)));
        }
    }
    (price, yld)
}

/// Nulls yields that cannot belong to a real quote at the given price.
///
/// Bands: near-par prices with yields outside [-5, 15]; deeply discounted
/// prices with yields above 60; far-above-par prices with yields below -20.
fn suppress_outlier_yield(price: Option<Decimal>, yld: Option<Decimal>) -> Option<Decimal> {
    let (Some(p), Some(y)) = (price, yld) else {
        return yld;
    };

    let implausible = (p >= dec!(95) && p <= dec!(105) && (y < dec!(-5) || y > dec!(15)))
        || (p < dec!(50) && y > dec!(60))
        || (p > dec!(150) && y < dec!(-20));

    if implausible {
        None
    } else {
        Some(y)
    }
}

/// Selects the best dealer row per ISIN.
///
/// Groups preserve first-appearance order. Within a group the row with the
/// greatest yield wins; missing yields compare as [`NULL_YIELD_SENTINEL`]
/// so they never beat a real quote, and ties keep the first row in original
/// order. Rows without an ISIN stay in the full table but produce no best
/// row.
#[must_use]
pub fn select_best(full: &[QuoteRow]) -> Vec<BestQuoteRow> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: std::collections::HashMap<&str, Vec<usize>> = std::collections::HashMap::new();

    for (idx, row) in full.iter().enumerate() {
        if let Some(isin) = row.isin.as_deref() {
            let group = groups.entry(isin).or_default();
            if group.is_empty() {
                order.push(isin);
            }
            group.push(idx);
        }
    }

    order
        .into_iter()
        .map(|isin| {
            let indices = &groups[isin];
            let nb_dealers = indices
                .iter()
                .filter(|&&idx| full[idx].dealer.is_some())
                .count() as u32;

            let mut winner = indices[0];
            let mut winner_yld = yield_or_sentinel(&full[winner]);
            for &idx in &indices[1..] {
                let yld = yield_or_sentinel(&full[idx]);
                if yld > winner_yld {
                    winner = idx;
                    winner_yld = yld;
                }
            }

            let quote = full[winner].clone();
            let best_dealer = quote.dealer.clone();
            BestQuoteRow {
                quote,
                nb_dealers,
                best_dealer,
            }
        })
        .collect()
}

fn yield_or_sentinel(row: &QuoteRow) -> Decimal {
    row.axe_offer_yld.unwrap_or(NULL_YIELD_SENTINEL)
}

/// Rounds a best row in place: spread fields ceiling to integers, price /
/// yield / quantity / composite / mid / offer-vs-mid to two decimals.
pub fn round_best_row(row: &mut BestQuoteRow) {
    let quote = &mut row.quote;

    for spread in [
        &mut quote.axe_offer_bmk_spd,
        &mut quote.axe_offer_i_spd,
        &mut quote.axe_offer_z_spd,
        &mut quote.axe_offer_asw,
    ] {
        *spread = spread.map(|value| value.ceil());
    }

    for field in [
        &mut quote.axe_offer_price,
        &mut quote.axe_offer_yld,
        &mut quote.axe_offer_qty,
        &mut quote.composite_bid_price,
        &mut quote.composite_offer_price,
        &mut quote.mid_price,
        &mut quote.axe_mid_spread,
    ] {
        *field = field.map(|value| value.round_dp(2));
    }
}
