//! Output formatting utilities.

use chrono::NaiveDate;
use colored::Colorize;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a rounded table, or a placeholder when empty.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints an informational notice (non-error empty states).
pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

/// Prints a section header.
pub fn header(message: &str) {
    println!("\n{}", message.bold());
}

/// Renders an optional string cell.
pub fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Renders an optional decimal cell.
pub fn opt_dec(value: &Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Renders an optional date cell.
pub fn opt_date(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}
