//! CSV export of a best-quote view.
//!
//! Serializes filtered best rows back out with the canonical column set in
//! display order. Dates are ISO, missing values are empty cells.

use std::io::Write;
use std::path::Path;

use crate::columns::EXPORT_COLUMNS;
use crate::error::{DataError, DataResult};
use crate::row::BestQuoteRow;

/// Writes best rows to a CSV file at `path`.
pub fn write_best_csv(rows: &[BestQuoteRow], path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_best(rows, file).map_err(|e| match e {
        DataError::Csv { message, .. } => DataError::csv(path.display().to_string(), message),
        other => other,
    })
}

/// Writes best rows as CSV to any writer.
pub fn write_best<W: Write>(rows: &[BestQuoteRow], writer: W) -> DataResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| DataError::csv("<writer>", e.to_string()))?;

    for row in rows {
        csv_writer
            .write_record(export_record(row))
            .map_err(|e| DataError::csv("<writer>", e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DataError::csv("<writer>", e.to_string()))?;
    Ok(())
}

/// Renders one best row in [`EXPORT_COLUMNS`] order.
fn export_record(row: &BestQuoteRow) -> Vec<String> {
    let quote = &row.quote;
    vec![
        text(&quote.issuer_name),
        text(&quote.bond_id),
        text(&quote.sector),
        text(&quote.sub_sector),
        text(&quote.ticker),
        text(&quote.isin),
        text(&quote.currency),
        decimal(&quote.coupon),
        text(&quote.coupon_type),
        quote.maturity.map(|d| d.to_string()).unwrap_or_default(),
        decimal(&quote.axe_offer_price),
        decimal(&quote.axe_offer_yld),
        decimal(&quote.axe_offer_qty),
        row.nb_dealers.to_string(),
        text(&row.best_dealer),
        decimal(&quote.composite_bid_price),
        decimal(&quote.composite_offer_price),
        decimal(&quote.axe_mid_spread),
        decimal(&quote.axe_offer_bmk_spd),
        decimal(&quote.axe_offer_z_spd),
        decimal(&quote.axe_offer_i_spd),
        decimal(&quote.axe_offer_asw),
        text(&quote.fitch_rating),
        text(&quote.moodys_rating),
        quote.rating_category.label().to_string(),
    ]
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn decimal(value: &Option<rust_decimal::Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
