//! Flows command implementation.
//!
//! Prints the offered-quantity pivot per rating category and tenor bucket,
//! the same aggregation the spread-curve heatmap consumes.

use anyhow::Result;
use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::Style;

use axedesk_core::{RatingCategory, TenorBucket};

use crate::cli::{Cli, FlowsArgs};
use crate::commands::load_tables;
use crate::output::header;

/// Execute the flows command.
pub fn execute(cli: &Cli, args: &FlowsArgs) -> Result<()> {
    let Some(tables) = load_tables(cli)? else {
        return Ok(());
    };

    let asof = args
        .asof
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let totals = tables.quantity_by_bucket(asof);

    header(&format!(
        "{} - offered quantity by rating and tenor (as of {asof})",
        tables.source_name
    ));

    let mut builder = Builder::default();
    let mut head = vec!["Rating".to_string()];
    head.extend(TenorBucket::all().iter().map(|b| b.label().to_string()));
    builder.push_record(head);

    for category in RatingCategory::all() {
        let mut record = vec![category.label().to_string()];
        for bucket in TenorBucket::all() {
            let qty = totals
                .get(&(*category, *bucket))
                .copied()
                .unwrap_or(Decimal::ZERO);
            record.push(if qty.is_zero() {
                "-".to_string()
            } else {
                qty.to_string()
            });
        }
        builder.push_record(record);
    }

    println!("{}", builder.build().with(Style::rounded()));
    Ok(())
}
