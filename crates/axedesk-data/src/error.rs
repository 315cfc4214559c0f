//! Error types for snapshot discovery and loading.
//!
//! Only hard failures surface here. Per-field parse failures null the field,
//! absent optional columns skip their dependent derivation, and lookups for
//! unknown keys return empty results; none of those are errors.

use thiserror::Error;

/// A specialized Result type for Axedesk data operations.
pub type DataResult<T> = Result<T, DataError>;

/// The main error type for snapshot loading and caching.
#[derive(Error, Debug)]
pub enum DataError {
    /// No snapshot file matches the configured pattern. Informational: the
    /// caller shows an empty state rather than failing the session.
    #[error("No axe snapshot matching {pattern} found in {dir}")]
    NoSourceData {
        /// Directory that was searched.
        dir: String,
        /// File name pattern that was searched for.
        pattern: String,
    },

    /// I/O error while listing or reading snapshot files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level read or write failure.
    #[error("CSV error in {path}: {message}")]
    Csv {
        /// File being read or written.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl DataError {
    /// Creates a no-source-data error.
    #[must_use]
    pub fn no_source_data(dir: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::NoSourceData {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a CSV error for a given path.
    #[must_use]
    pub fn csv(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if this is the informational "nothing to show" state.
    #[must_use]
    pub fn is_no_source_data(&self) -> bool {
        matches!(self, Self::NoSourceData { .. })
    }
}
