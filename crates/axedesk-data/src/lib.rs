//! # Axedesk Data
//!
//! Snapshot ingestion, normalization, and session-cached tables for the
//! Axedesk credit-axe toolkit.
//!
//! The crate turns a directory of daily dealer-quote snapshot files into two
//! in-memory tables per session:
//!
//! - **Full table**: every dealer row, normalized (one instrument appears
//!   once per quoting dealer)
//! - **Best table**: exactly one row per ISIN, the dealer with the highest
//!   offer yield, annotated with the dealer count
//!
//! ## Flow
//!
//! ```text
//! data dir -> SnapshotSource (discover latest stamp, read sheets)
//!          -> pipeline::run (normalize, enrich, select best, round)
//!          -> AxeTables (lookups, filters, aggregation, export)
//!          -> SessionCache (compute once per session)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use axedesk_data::{SessionCache, SnapshotSource, SourceConfig};
//!
//! let source = SnapshotSource::new(SourceConfig::default());
//! let cache = SessionCache::new();
//! let tables = cache.get_or_load("session-1", &source)?;
//! println!("{} best quotes", tables.best.len());
//! # Ok::<(), axedesk_data::DataError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

pub mod cache;
pub mod columns;
pub mod error;
pub mod export;
pub mod parse;
pub mod pipeline;
pub mod row;
pub mod source;
pub mod tables;

// Re-export commonly used types at crate root
pub use cache::SessionCache;
pub use error::{DataError, DataResult};
pub use export::{write_best, write_best_csv};
pub use row::{BestQuoteRow, QuoteRow, RawQuoteRow};
pub use source::{pick_latest, Snapshot, SnapshotSource, SourceConfig};
pub use tables::{AxeFilter, AxeTables};
