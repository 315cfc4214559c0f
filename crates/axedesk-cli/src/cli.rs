//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Axedesk - credit-axe snapshot inspection and export
#[derive(Parser)]
#[command(name = "axedesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML source configuration file
    #[arg(short, long, global = true, env = "AXEDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot directory (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Load the latest snapshot and show the best-quote table
    Summary(SummaryArgs),

    /// Export a filtered best-quote view to CSV
    Export(ExportArgs),

    /// Offered quantity per rating category and tenor bucket
    Flows(FlowsArgs),

    /// Best axes and dealer detail for one issuer
    Issuer(IssuerArgs),
}

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Maximum number of best rows to print
    #[arg(short, long, default_value = "15")]
    pub limit: usize,
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Keep only these currencies (repeatable)
    #[arg(long = "currency")]
    pub currencies: Vec<String>,

    /// Keep only these top-level sectors (repeatable)
    #[arg(long = "sector")]
    pub sectors: Vec<String>,

    /// Keep only these rating categories, by label (repeatable)
    #[arg(long = "rating")]
    pub ratings: Vec<String>,

    /// Keep only this issuer
    #[arg(long)]
    pub issuer: Option<String>,

    /// Minimum offered quantity
    #[arg(long)]
    pub min_qty: Option<Decimal>,
}

/// Arguments for the flows command.
#[derive(Args, Debug)]
pub struct FlowsArgs {
    /// As-of date for tenor bucketing (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub asof: Option<NaiveDate>,
}

/// Arguments for the issuer command.
#[derive(Args, Debug)]
pub struct IssuerArgs {
    /// Issuer name, exactly as it appears in the snapshot
    pub name: String,
}
