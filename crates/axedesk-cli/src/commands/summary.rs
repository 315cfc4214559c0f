//! Summary command implementation.
//!
//! Loads the latest snapshot and prints the head of the best-quote table.

use anyhow::Result;
use tabled::Tabled;

use axedesk_data::BestQuoteRow;

use crate::cli::{Cli, SummaryArgs};
use crate::commands::load_tables;
use crate::output::{header, opt_date, opt_dec, opt_str, print_table};

/// One best-quote line of the summary table.
#[derive(Tabled)]
pub struct SummaryLine {
    #[tabled(rename = "ISIN")]
    pub isin: String,
    #[tabled(rename = "Issuer")]
    pub issuer: String,
    #[tabled(rename = "Ccy")]
    pub currency: String,
    #[tabled(rename = "Maturity")]
    pub maturity: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Yld %")]
    pub yld: String,
    #[tabled(rename = "Qty")]
    pub qty: String,
    #[tabled(rename = "Dealers")]
    pub dealers: u32,
    #[tabled(rename = "Best Dealer")]
    pub best_dealer: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
}

impl From<&BestQuoteRow> for SummaryLine {
    fn from(row: &BestQuoteRow) -> Self {
        let quote = &row.quote;
        Self {
            isin: opt_str(&quote.isin),
            issuer: opt_str(&quote.issuer_name),
            currency: opt_str(&quote.currency),
            maturity: opt_date(&quote.maturity),
            price: opt_dec(&quote.axe_offer_price),
            yld: opt_dec(&quote.axe_offer_yld),
            qty: opt_dec(&quote.axe_offer_qty),
            dealers: row.nb_dealers,
            best_dealer: opt_str(&row.best_dealer),
            rating: quote.rating_category.label().to_string(),
        }
    }
}

/// Execute the summary command.
pub fn execute(cli: &Cli, args: &SummaryArgs) -> Result<()> {
    let Some(tables) = load_tables(cli)? else {
        return Ok(());
    };

    header(&format!(
        "{} - {} best quotes across {} dealer rows",
        tables.source_name,
        tables.best.len(),
        tables.full.len()
    ));

    let lines: Vec<SummaryLine> = tables
        .best
        .iter()
        .take(args.limit)
        .map(SummaryLine::from)
        .collect();
    print_table(&lines);

    if tables.best.len() > args.limit {
        println!("... and {} more rows", tables.best.len() - args.limit);
    }

    Ok(())
}
