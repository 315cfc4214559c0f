//! Axedesk CLI - Inspect and export daily credit-axe snapshots.
//!
//! # Usage
//!
//! ```bash
//! # Load the latest snapshot and show the best-quote table
//! axedesk summary
//!
//! # Export a filtered view
//! axedesk export --output axes_filtered.csv --currency USD --rating "High Yield"
//!
//! # Offered quantity per rating category and tenor bucket
//! axedesk flows --asof 2025-08-04
//!
//! # Best axes and dealer detail for one issuer
//! axedesk issuer "ACME CORP"
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,axedesk=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Summary(args) => commands::summary::execute(&cli, args)?,
        Commands::Export(args) => commands::export::execute(&cli, args)?,
        Commands::Flows(args) => commands::flows::execute(&cli, args)?,
        Commands::Issuer(args) => commands::issuer::execute(&cli, args)?,
    }

    Ok(())
}
