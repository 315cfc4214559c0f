//! Export command implementation.
//!
//! Applies the requested filters to the best-quote table and writes the
//! result to CSV with the canonical column set.

use anyhow::{bail, Result};

use axedesk_core::RatingCategory;
use axedesk_data::{write_best_csv, AxeFilter};

use crate::cli::{Cli, ExportArgs};
use crate::commands::load_tables;

/// Execute the export command.
pub fn execute(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let Some(tables) = load_tables(cli)? else {
        return Ok(());
    };

    let filter = build_filter(args)?;
    let rows = filter.apply(&tables);
    write_best_csv(&rows, &args.output)?;

    println!(
        "Exported {} of {} best quotes to {}",
        rows.len(),
        tables.best.len(),
        args.output.display()
    );
    Ok(())
}

fn build_filter(args: &ExportArgs) -> Result<AxeFilter> {
    let rating_categories = if args.ratings.is_empty() {
        None
    } else {
        let mut categories = Vec::with_capacity(args.ratings.len());
        for label in &args.ratings {
            let Some(category) = RatingCategory::from_label(label) else {
                bail!(
                    "Unknown rating category '{label}'. Valid labels: {}",
                    RatingCategory::all()
                        .iter()
                        .map(|c| c.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            categories.push(category);
        }
        Some(categories)
    };

    Ok(AxeFilter {
        currencies: non_empty(&args.currencies),
        sectors: non_empty(&args.sectors),
        rating_categories,
        issuer: args.issuer.clone(),
        min_qty: args.min_qty,
        ..AxeFilter::default()
    })
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
