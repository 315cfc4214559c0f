//! Snapshot discovery and loading.
//!
//! A snapshot is a set of per-currency CSV files in one directory sharing a
//! date stamp: `<prefix><YYYYMMDD>_<CCY><ext>`, e.g. `Axes_20250804_USD.csv`
//! and `Axes_20250804_EUR.csv`. Discovery selects the latest stamp and
//! loading concatenates all of its files through the harmonizing reader, so
//! downstream code sees one row set per snapshot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::columns::{canonical, resolve_header};
use crate::error::{DataError, DataResult};
use crate::parse::{non_empty, parse_decimal};
use crate::row::RawQuoteRow;

/// Source discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory holding snapshot files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name prefix before the date stamp.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// File extension including the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_prefix() -> String {
    "Axes_".to_string()
}

fn default_extension() -> String {
    ".csv".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            prefix: default_prefix(),
            extension: default_extension(),
        }
    }
}

impl SourceConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DataError::config(e.to_string()))
    }

    /// Returns the file name pattern being searched for, for messages.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("{}*{}", self.prefix, self.extension)
    }
}

/// One discovered snapshot: a date stamp and its sheet files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The date stamp shared by the snapshot's files.
    pub stamp: String,
    /// All sheet files of the snapshot, sorted by name.
    pub files: Vec<PathBuf>,
    /// Display name (`prefix + stamp`).
    pub name: String,
}

/// Returns the lexicographically greatest candidate name.
///
/// With a fixed zero-padded `YYYYMMDD` stamp after a constant prefix, the
/// string ordering coincides with date ordering; that fixed format is what
/// makes this correct.
#[must_use]
pub fn pick_latest(candidates: &[String]) -> Option<&String> {
    candidates.iter().max()
}

/// File-system source for axe snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    config: SourceConfig,
}

impl SnapshotSource {
    /// Creates a source over the given configuration.
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Returns the source configuration.
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Finds the latest snapshot in the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NoSourceData`] when no file matches the
    /// configured pattern (a missing directory counts as no data).
    pub fn discover(&self) -> DataResult<Snapshot> {
        let candidates = self.candidate_names()?;

        let latest = pick_latest(&candidates).ok_or_else(|| {
            DataError::no_source_data(&self.config.data_dir, self.config.pattern())
        })?;

        let stamp = self.stamp_of(latest);
        let files: Vec<PathBuf> = {
            let mut names: Vec<&String> = candidates
                .iter()
                .filter(|name| self.stamp_of(name) == stamp)
                .collect();
            names.sort();
            names
                .into_iter()
                .map(|name| Path::new(&self.config.data_dir).join(name))
                .collect()
        };

        debug!(stamp = %stamp, files = files.len(), "discovered snapshot");

        Ok(Snapshot {
            name: format!("{}{}", self.config.prefix, stamp),
            stamp,
            files,
        })
    }

    /// Reads and concatenates all sheet files of a snapshot.
    pub fn load_rows(&self, snapshot: &Snapshot) -> DataResult<Vec<RawQuoteRow>> {
        let mut rows = Vec::new();
        for file in &snapshot.files {
            let before = rows.len();
            read_sheet(file, &mut rows)?;
            info!(
                file = %file.display(),
                rows = rows.len() - before,
                "loaded snapshot sheet"
            );
        }
        Ok(rows)
    }

    /// Discovers the latest snapshot and loads its rows in one step.
    pub fn load_latest(&self) -> DataResult<(Snapshot, Vec<RawQuoteRow>)> {
        let snapshot = self.discover()?;
        let rows = self.load_rows(&snapshot)?;
        Ok((snapshot, rows))
    }

    /// Lists file names in the data directory matching the pattern.
    fn candidate_names(&self) -> DataResult<Vec<String>> {
        let dir = Path::new(&self.config.data_dir);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(&self.config.prefix) && name.ends_with(&self.config.extension) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    /// Extracts the date stamp from a matching file name: the segment
    /// between the prefix and the first underscore (or the extension).
    fn stamp_of(&self, name: &str) -> String {
        let middle = name
            .strip_prefix(&self.config.prefix)
            .and_then(|rest| rest.strip_suffix(&self.config.extension))
            .unwrap_or(name);
        middle
            .split_once('_')
            .map_or(middle, |(stamp, _)| stamp)
            .to_string()
    }
}

// =============================================================================
// HARMONIZING CSV READER
// =============================================================================

/// Maps canonical column names to record positions for one sheet.
///
/// Headers are whitespace-trimmed, legacy names are renamed, and deprecated
/// columns are dropped before indexing. A column the sheet does not carry
/// simply yields `None` for every row, which is what lets dependent pipeline
/// steps skip themselves.
struct HeaderMap {
    index: HashMap<String, usize>,
}

impl HeaderMap {
    fn new(headers: &StringRecord) -> Self {
        let mut index = HashMap::new();
        for (pos, header) in headers.iter().enumerate() {
            if let Some(name) = resolve_header(header.trim()) {
                // First occurrence wins when legacy and canonical coexist.
                index.entry(name.to_string()).or_insert(pos);
            }
        }
        Self { index }
    }

    fn cell<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.index.get(name).and_then(|&pos| record.get(pos))
    }

    fn text(&self, record: &StringRecord, name: &str) -> Option<String> {
        self.cell(record, name).and_then(non_empty)
    }

    fn decimal(&self, record: &StringRecord, name: &str) -> Option<rust_decimal::Decimal> {
        self.cell(record, name).and_then(parse_decimal)
    }
}

/// Reads one sheet file, appending harmonized rows.
fn read_sheet(path: &Path, rows: &mut Vec<RawQuoteRow>) -> DataResult<()> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::csv(path.display().to_string(), e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| DataError::csv(path.display().to_string(), e.to_string()))?
        .clone();
    let map = HeaderMap::new(&headers);

    for result in reader.records() {
        let record = result.map_err(|e| DataError::csv(path.display().to_string(), e.to_string()))?;
        rows.push(read_row(&map, &record));
    }

    Ok(())
}

/// Builds a harmonized raw row from one CSV record.
fn read_row(map: &HeaderMap, record: &StringRecord) -> RawQuoteRow {
    RawQuoteRow {
        isin: map.text(record, canonical::ISIN),
        issuer_name: map.text(record, canonical::ISSUER_NAME),
        bond_id: map.text(record, canonical::BOND_ID),
        ticker: map.text(record, canonical::TICKER),
        currency: map.text(record, canonical::CURRENCY),
        coupon: map.decimal(record, canonical::COUPON),
        coupon_type: map.text(record, canonical::COUPON_TYPE),
        maturity: map.text(record, canonical::MATURITY),
        sector: map.text(record, canonical::SECTOR),
        fitch_rating: map.text(record, canonical::FITCH_RATING),
        moodys_rating: map.text(record, canonical::MOODYS_RATING),
        dealer: map.text(record, canonical::DEALER),
        axe_offer_price: map.decimal(record, canonical::AXE_OFFER_PRICE),
        axe_offer_yld: map.decimal(record, canonical::AXE_OFFER_YLD),
        axe_offer_qty: map.decimal(record, canonical::AXE_OFFER_QTY),
        axe_offer_bmk_spd: map.decimal(record, canonical::AXE_OFFER_BMK_SPD),
        axe_offer_i_spd: map.decimal(record, canonical::AXE_OFFER_I_SPD),
        axe_offer_z_spd: map.decimal(record, canonical::AXE_OFFER_Z_SPD),
        axe_offer_asw: map.decimal(record, canonical::AXE_OFFER_ASW),
        stream_offer_price: map.decimal(record, canonical::STREAM_OFFER_PRICE),
        tw_bid_price: map.decimal(record, canonical::TW_BID_PRICE),
        tw_offer_price: map.decimal(record, canonical::TW_OFFER_PRICE),
    }
}
