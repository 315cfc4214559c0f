//! Integration test: load a two-sheet snapshot end to end.
//!
//! The fixture mirrors a real feed day: USD and EUR sheets sharing one date
//! stamp, legacy `IA_Offer_*` headers, stray header whitespace, a deprecated
//! column, an inverted price/yield pair, an implausible yield, a quote-less
//! row, and a stale snapshot from three days earlier that must be ignored.

use std::path::Path;
use std::sync::Arc;

use rust_decimal_macros::dec;

use axedesk_core::RatingCategory;
use axedesk_data::{AxeFilter, SessionCache, SnapshotSource, SourceConfig};

const USD_SHEET: &str = "\
ISIN, IssuerName ,Sector,FitchRating,Moody's_rating,Dealer,Currency,Maturity,IA_Offer_Price,IA_Offer_YLD,IA_Offer_QTY,IA_Offer_BMK_SPD,Stream_Offer_Price,TW_Bid_Price,TW_Offer_Price,CompositeRating
US1111111111,ACME,HY Retail,BB,Ba2,BNP,USD,2031-01-15,88.25,0.0825,1000000,312.4,88.10,88.00,88.50,ignored
US1111111111,ACME,HY Retail,BB,Ba2,GS,USD,2031-01-15,88.50,0.0850,2000000,309.8,88.40,88.00,88.50,ignored
US1111111111,ACME,HY Retail,BB,Ba2,JPM,USD,2031-01-15,88.00,,500000,315.0,88.20,88.00,88.50,ignored
US2222222222,GLOBEX,IG CoCo Banks,,Aa2,DB,USD,2029-06-30,4.1,0.9725,750000,95.2,97.30,97.00,97.50,ignored
US3333333333,INITECH,IG Industrials,A-,A3,BNP,USD,2027-03-01,100.50,0.2100,250000,44.9,100.40,100.25,100.75,ignored
US4444444444,HOOLI,EM-Sov Latam,NR,,GS,USD,,,,,,,,,ignored
";

const EUR_SHEET: &str = "\
ISIN,IssuerName,Sector,FitchRating,Moody's_rating,Dealer,Currency,Maturity,IA_Offer_Price,IA_Offer_YLD,IA_Offer_QTY,IA_Offer_BMK_SPD,Stream_Offer_Price,TW_Bid_Price,TW_Offer_Price
DE5555555555,UMBRELLA,IG Utilities,BBB+,Baa1,SG,EUR,2033-09-20,101.125,0.0388,1500000,128.6,101.00,100.90,101.30
";

const STALE_SHEET: &str = "\
ISIN,IssuerName,Dealer,IA_Offer_Price,IA_Offer_YLD
US9999999999,STALE,UBS,50.0,0.0500
";

fn write_fixture(dir: &Path) {
    std::fs::write(dir.join("Axes_20250801_USD.csv"), STALE_SHEET).unwrap();
    std::fs::write(dir.join("Axes_20250804_USD.csv"), USD_SHEET).unwrap();
    std::fs::write(dir.join("Axes_20250804_EUR.csv"), EUR_SHEET).unwrap();
}

fn load(dir: &Path) -> Arc<axedesk_data::AxeTables> {
    let source = SnapshotSource::new(SourceConfig {
        data_dir: dir.to_str().unwrap().to_string(),
        ..SourceConfig::default()
    });
    SessionCache::new().get_or_load("it", &source).unwrap()
}

#[test]
fn test_latest_snapshot_sheets_are_concatenated() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    assert_eq!(tables.source_name, "Axes_20250804");
    // Six USD rows minus the quote-less HOOLI row, plus one EUR row.
    assert_eq!(tables.full.len(), 6);
    assert!(tables.best_by_isin("US9999999999").is_none());
    assert!(tables.best_by_isin("DE5555555555").is_some());
}

#[test]
fn test_full_table_invariants() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    // Every surviving row carries an offer price.
    assert!(tables.full.iter().all(|r| r.axe_offer_price.is_some()));

    // Exactly one best row per distinct ISIN in the full table.
    let mut isins: Vec<_> = tables
        .full
        .iter()
        .filter_map(|r| r.isin.clone())
        .collect();
    isins.sort();
    isins.dedup();
    assert_eq!(tables.best.len(), isins.len());
}

#[test]
fn test_best_dealer_selection_and_dealer_count() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    let acme = tables.best_by_isin("US1111111111").unwrap();
    assert_eq!(acme.best_dealer.as_deref(), Some("GS"));
    assert_eq!(acme.nb_dealers, 3);
    assert_eq!(acme.quote.axe_offer_yld, Some(dec!(8.5)));

    // All three dealer rows remain visible in the full table.
    assert_eq!(tables.dealers_for("US1111111111").len(), 3);
}

#[test]
fn test_inverted_pair_is_corrected() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    // GLOBEX arrived with price 4.1 / yield 0.9725 against a 97.30
    // reference: the channels were transposed upstream.
    let globex = tables.best_by_isin("US2222222222").unwrap();
    assert_eq!(globex.quote.axe_offer_price, Some(dec!(97.25)));
    assert_eq!(globex.quote.axe_offer_yld, Some(dec!(4.1)));
}

#[test]
fn test_implausible_yield_is_nulled_not_dropped() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    // INITECH quoted 21% at a price of 100.50.
    let initech = tables.best_by_isin("US3333333333").unwrap();
    assert!(initech.quote.axe_offer_yld.is_none());
    assert_eq!(initech.quote.axe_offer_price, Some(dec!(100.50)));
}

#[test]
fn test_enrichment_and_rounding_on_best_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    let umbrella = tables.best_by_isin("DE5555555555").unwrap();
    assert_eq!(umbrella.quote.sector.as_deref(), Some("IG CORPO"));
    assert_eq!(umbrella.quote.sub_sector.as_deref(), Some("IG Utilities"));
    assert_eq!(umbrella.quote.rating_category, RatingCategory::Crossover);
    // 128.6 ceilinged; 101.125 rounds half-to-even to 2 dp.
    assert_eq!(umbrella.quote.axe_offer_bmk_spd, Some(dec!(129)));
    assert_eq!(umbrella.quote.axe_offer_price, Some(dec!(101.12)));
    assert_eq!(umbrella.quote.mid_price, Some(dec!(101.1)));

    let globex = tables.best_by_isin("US2222222222").unwrap();
    assert_eq!(globex.quote.sector.as_deref(), Some("IG FIN"));

    let acme = tables.best_by_isin("US1111111111").unwrap();
    assert_eq!(acme.quote.sector.as_deref(), Some("HY"));
    // The full-table copy of the same dealer row stays unrounded.
    let acme_full = tables
        .dealers_for("US1111111111")
        .into_iter()
        .find(|r| r.dealer.as_deref() == Some("GS"))
        .unwrap()
        .clone();
    assert_eq!(acme_full.axe_offer_bmk_spd, Some(dec!(309.8)));
}

#[test]
fn test_filtered_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let tables = load(dir.path());

    let filter = AxeFilter {
        currencies: Some(vec!["USD".to_string()]),
        rating_categories: Some(vec![RatingCategory::Crossover]),
        ..AxeFilter::default()
    };
    // Only ACME survives: GLOBEX has no Fitch rating and its Moody's Aa2
    // classifies as Not Rated, INITECH is investment grade, UMBRELLA is EUR.
    let rows = filter.apply(&tables);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quote.isin.as_deref(), Some("US1111111111"));

    let out = dir.path().join("export.csv");
    axedesk_data::write_best_csv(&rows, &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), rows.len() + 1);
    assert!(content.lines().next().unwrap().starts_with("IssuerName,"));
}
