//! Issuer command implementation.
//!
//! Shows an issuer's best axes, then the full dealer detail per ISIN.

use anyhow::Result;
use tabled::Tabled;

use axedesk_data::QuoteRow;

use crate::cli::{Cli, IssuerArgs};
use crate::commands::load_tables;
use crate::output::{header, notice, opt_dec, opt_str, print_table};

use super::summary::SummaryLine;

/// One dealer line of the per-ISIN detail table.
#[derive(Tabled)]
struct DealerLine {
    #[tabled(rename = "Dealer")]
    dealer: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Yld %")]
    yld: String,
    #[tabled(rename = "Qty")]
    qty: String,
    #[tabled(rename = "Comp Bid")]
    composite_bid: String,
    #[tabled(rename = "Comp Offer")]
    composite_offer: String,
    #[tabled(rename = "Axe vs Mid")]
    axe_mid_spread: String,
    #[tabled(rename = "BMK Spd")]
    bmk_spd: String,
    #[tabled(rename = "Z-Spd")]
    z_spd: String,
}

impl From<&&QuoteRow> for DealerLine {
    fn from(row: &&QuoteRow) -> Self {
        Self {
            dealer: opt_str(&row.dealer),
            price: opt_dec(&row.axe_offer_price),
            yld: opt_dec(&row.axe_offer_yld),
            qty: opt_dec(&row.axe_offer_qty),
            composite_bid: opt_dec(&row.composite_bid_price),
            composite_offer: opt_dec(&row.composite_offer_price),
            axe_mid_spread: opt_dec(&row.axe_mid_spread),
            bmk_spd: opt_dec(&row.axe_offer_bmk_spd),
            z_spd: opt_dec(&row.axe_offer_z_spd),
        }
    }
}

/// Execute the issuer command.
pub fn execute(cli: &Cli, args: &IssuerArgs) -> Result<()> {
    let Some(tables) = load_tables(cli)? else {
        return Ok(());
    };

    let rows = tables.issuer_rows(&args.name);
    if rows.is_empty() {
        // A stale or mistyped issuer is an empty state, not a failure.
        notice(&format!("No axes for issuer '{}'", args.name));
        return Ok(());
    }

    header(&format!("Best axes of {}", args.name));
    let lines: Vec<SummaryLine> = rows.iter().map(|row| SummaryLine::from(*row)).collect();
    print_table(&lines);

    for row in &rows {
        if let Some(isin) = row.quote.isin.as_deref() {
            header(&format!("Dealers axed on {isin}"));
            let dealers: Vec<DealerLine> = tables
                .dealers_for(isin)
                .iter()
                .map(DealerLine::from)
                .collect();
            print_table(&dealers);
        }
    }

    Ok(())
}
