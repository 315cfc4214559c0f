//! Command implementations.

pub mod export;
pub mod flows;
pub mod issuer;
pub mod summary;

use anyhow::Result;

use axedesk_data::{pipeline, AxeTables, DataError, SnapshotSource, SourceConfig};

use crate::cli::Cli;
use crate::output;

/// Builds the snapshot source from the CLI options: configuration file if
/// given, defaults otherwise, with `--data-dir` taking precedence.
pub fn resolve_source(cli: &Cli) -> Result<SnapshotSource> {
    let mut config = match &cli.config {
        Some(path) => SourceConfig::from_file(path)?,
        None => SourceConfig::default(),
    };

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir.clone_from(data_dir);
    }

    tracing::debug!(data_dir = %config.data_dir, pattern = %config.pattern(), "resolved source");
    Ok(SnapshotSource::new(config))
}

/// Loads the latest snapshot and runs the pipeline.
///
/// A missing snapshot is the expected empty state: a notice is printed and
/// `None` returned so commands exit cleanly with nothing to show.
pub fn load_tables(cli: &Cli) -> Result<Option<AxeTables>> {
    let source = resolve_source(cli)?;

    match source.load_latest() {
        Ok((snapshot, rows)) => Ok(Some(pipeline::run(rows, snapshot.name))),
        Err(err @ DataError::NoSourceData { .. }) => {
            output::notice(&err.to_string());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
