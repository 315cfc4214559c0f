//! Session tables produced by the pipeline and the read operations views
//! consume.
//!
//! The tables are logically immutable once built: lookups hand out
//! references and [`AxeFilter::apply`] clones matching rows, so one view's
//! filtering never perturbs another view's baseline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use axedesk_core::{RatingCategory, TenorBucket};

use crate::row::{BestQuoteRow, QuoteRow};

/// The pipeline output pair for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxeTables {
    /// Name of the snapshot these tables were computed from.
    pub source_name: String,
    /// Full multi-dealer table, unrounded; drives per-instrument views.
    pub full: Vec<QuoteRow>,
    /// One best quote per ISIN; drives most views.
    pub best: Vec<BestQuoteRow>,
}

impl AxeTables {
    /// Creates tables from pipeline output.
    #[must_use]
    pub fn new(
        source_name: impl Into<String>,
        full: Vec<QuoteRow>,
        best: Vec<BestQuoteRow>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            full,
            best,
        }
    }

    /// Looks up the best quote for an ISIN. Unknown ISINs (e.g. a stale
    /// selection after a reload) return `None`, not an error.
    #[must_use]
    pub fn best_by_isin(&self, isin: &str) -> Option<&BestQuoteRow> {
        self.best
            .iter()
            .find(|row| row.quote.isin.as_deref() == Some(isin))
    }

    /// Returns every dealer row for an ISIN from the full table; empty when
    /// the ISIN is unknown.
    #[must_use]
    pub fn dealers_for(&self, isin: &str) -> Vec<&QuoteRow> {
        self.full
            .iter()
            .filter(|row| row.isin.as_deref() == Some(isin))
            .collect()
    }

    /// Returns the best rows of one issuer; empty when the issuer is
    /// unknown.
    #[must_use]
    pub fn issuer_rows(&self, issuer_name: &str) -> Vec<&BestQuoteRow> {
        self.best
            .iter()
            .filter(|row| row.quote.issuer_name.as_deref() == Some(issuer_name))
            .collect()
    }

    /// Returns the sorted distinct issuer names of the best table.
    #[must_use]
    pub fn issuers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .best
            .iter()
            .filter_map(|row| row.quote.issuer_name.as_deref())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Sums offered quantity per rating category and tenor bucket.
    ///
    /// Tenor buckets are computed against `asof`. Rows without a quantity
    /// contribute nothing; rows without a maturity land in the PERP bucket.
    /// The map iterates in vocabulary order on both axes.
    #[must_use]
    pub fn quantity_by_bucket(
        &self,
        asof: NaiveDate,
    ) -> BTreeMap<(RatingCategory, TenorBucket), Decimal> {
        let mut totals = BTreeMap::new();
        for row in &self.best {
            let Some(qty) = row.quote.axe_offer_qty else {
                continue;
            };
            let bucket = TenorBucket::from_maturity(row.quote.maturity, asof);
            *totals
                .entry((row.quote.rating_category, bucket))
                .or_insert(Decimal::ZERO) += qty;
        }
        totals
    }
}

/// A free-form filter over the best-quote table.
///
/// Unset dimensions pass every row. Range and minimum filters reject rows
/// whose underlying field is missing, matching how the original screens
/// behaved on null cells.
#[derive(Debug, Clone, Default)]
pub struct AxeFilter {
    /// Keep rows quoted in any of these currencies.
    pub currencies: Option<Vec<String>>,
    /// Keep rows in any of these top-level sectors.
    pub sectors: Option<Vec<String>>,
    /// Keep rows in any of these rating categories.
    pub rating_categories: Option<Vec<RatingCategory>>,
    /// Keep rows of this issuer only.
    pub issuer: Option<String>,
    /// Keep rows with at least this offered quantity.
    pub min_qty: Option<Decimal>,
    /// Keep rows whose offer yield lies in this inclusive range.
    pub yield_range: Option<(Decimal, Decimal)>,
    /// Keep rows whose maturity lies in this inclusive range.
    pub maturity_range: Option<(NaiveDate, NaiveDate)>,
}

impl AxeFilter {
    /// Applies the filter, cloning matching best rows.
    #[must_use]
    pub fn apply(&self, tables: &AxeTables) -> Vec<BestQuoteRow> {
        tables
            .best
            .iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect()
    }

    fn matches(&self, row: &BestQuoteRow) -> bool {
        let quote = &row.quote;

        if let Some(currencies) = &self.currencies {
            match &quote.currency {
                Some(ccy) if currencies.iter().any(|c| c == ccy) => {}
                _ => return false,
            }
        }

        if let Some(sectors) = &self.sectors {
            match &quote.sector {
                Some(sector) if sectors.iter().any(|s| s == sector) => {}
                _ => return false,
            }
        }

        if let Some(categories) = &self.rating_categories {
            if !categories.contains(&quote.rating_category) {
                return false;
            }
        }

        if let Some(issuer) = &self.issuer {
            if quote.issuer_name.as_deref() != Some(issuer.as_str()) {
                return false;
            }
        }

        if let Some(min_qty) = self.min_qty {
            match quote.axe_offer_qty {
                Some(qty) if qty >= min_qty => {}
                _ => return false,
            }
        }

        if let Some((lo, hi)) = self.yield_range {
            match quote.axe_offer_yld {
                Some(yld) if yld >= lo && yld <= hi => {}
                _ => return false,
            }
        }

        if let Some((from, to)) = self.maturity_range {
            match quote.maturity {
                Some(maturity) if maturity >= from && maturity <= to => {}
                _ => return false,
            }
        }

        true
    }
}
