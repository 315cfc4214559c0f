//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const SHEET: &str = "\
ISIN,IssuerName,Sector,FitchRating,Moody's_rating,Dealer,Currency,Maturity,IA_Offer_Price,IA_Offer_YLD,IA_Offer_QTY,TW_Bid_Price,TW_Offer_Price
US1111111111,ACME,HY Retail,BB,Ba2,BNP,USD,2031-01-15,88.25,0.0825,1000000,88.00,88.50
US1111111111,ACME,HY Retail,BB,Ba2,GS,USD,2031-01-15,88.50,0.0850,2000000,88.00,88.50
DE5555555555,UMBRELLA,IG Utilities,BBB+,Baa1,SG,EUR,2033-09-20,101.125,0.0388,1500000,100.90,101.30
";

fn axedesk() -> Command {
    Command::cargo_bin("axedesk").unwrap()
}

fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Axes_20250804_USD.csv"), SHEET).unwrap();
    dir
}

#[test]
fn test_summary_prints_best_table() {
    let dir = fixture_dir();

    axedesk()
        .args(["--data-dir", dir.path().to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Axes_20250804"))
        .stdout(predicate::str::contains("2 best quotes"))
        .stdout(predicate::str::contains("GS"));
}

#[test]
fn test_missing_data_is_informational_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();

    axedesk()
        .args(["--data-dir", dir.path().to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No axe snapshot"));
}

#[test]
fn test_export_writes_filtered_csv() {
    let dir = fixture_dir();
    let out = dir.path().join("filtered.csv");

    axedesk()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "export",
            "--output",
            out.to_str().unwrap(),
            "--currency",
            "USD",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 of 2"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.lines().next().unwrap().starts_with("IssuerName,"));
    assert!(content.contains("US1111111111"));
    assert!(!content.contains("DE5555555555"));
}

#[test]
fn test_export_rejects_unknown_rating_label() {
    let dir = fixture_dir();
    let out = dir.path().join("filtered.csv");

    axedesk()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "export",
            "--output",
            out.to_str().unwrap(),
            "--rating",
            "Prime",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rating category"));
}

#[test]
fn test_flows_prints_pivot() {
    let dir = fixture_dir();

    axedesk()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "flows",
            "--asof",
            "2025-08-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5-7Y"))
        .stdout(predicate::str::contains("High Yield"))
        .stdout(predicate::str::contains("2000000"));
}

#[test]
fn test_issuer_detail_lists_dealers() {
    let dir = fixture_dir();

    axedesk()
        .args(["--data-dir", dir.path().to_str().unwrap(), "issuer", "ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best axes of ACME"))
        .stdout(predicate::str::contains("Dealers axed on US1111111111"))
        .stdout(predicate::str::contains("BNP"));
}

#[test]
fn test_unknown_issuer_is_empty_state() {
    let dir = fixture_dir();

    axedesk()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "issuer",
            "INITECH",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No axes for issuer"));
}
