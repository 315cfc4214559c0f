//! Session-scoped table cache.
//!
//! The pipeline runs at most once per session; every view of that session
//! then shares the same immutable tables. Sessions are isolated from each
//! other, and an entry is only replaced when a newer snapshot stamp appears
//! or the session is explicitly invalidated.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::error::DataResult;
use crate::pipeline;
use crate::source::SnapshotSource;
use crate::tables::AxeTables;

/// Compute-once-per-session cache of pipeline output.
#[derive(Debug, Default)]
pub struct SessionCache {
    sessions: RwLock<HashMap<String, Arc<AxeTables>>>,
}

impl SessionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session's tables, computing them on first access.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::DataError::NoSourceData`] and load failures from
    /// the source; nothing is cached on error, so a later call retries.
    pub fn get_or_load(
        &self,
        session_id: &str,
        source: &SnapshotSource,
    ) -> DataResult<Arc<AxeTables>> {
        if let Some(tables) = self.get(session_id) {
            return Ok(tables);
        }

        let (snapshot, rows) = source.load_latest()?;
        let tables = Arc::new(pipeline::run(rows, snapshot.name));

        info!(
            session = session_id,
            source = %tables.source_name,
            "cached session tables"
        );

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.to_string(), Arc::clone(&tables));
        Ok(tables)
    }

    /// Re-runs discovery and replaces the session's tables only when a newer
    /// snapshot is available; otherwise returns the cached tables untouched.
    pub fn refresh(&self, session_id: &str, source: &SnapshotSource) -> DataResult<Arc<AxeTables>> {
        let cached = self.get(session_id);

        if let Some(tables) = &cached {
            let snapshot = source.discover()?;
            if snapshot.name == tables.source_name {
                return Ok(Arc::clone(tables));
            }
            info!(
                session = session_id,
                old = %tables.source_name,
                new = %snapshot.name,
                "newer snapshot available, recomputing"
            );
            self.invalidate(session_id);
        }

        self.get_or_load(session_id, source)
    }

    /// Drops a session's cached tables.
    pub fn invalidate(&self, session_id: &str) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id);
    }

    /// Returns the session's tables without computing anything.
    #[must_use]
    pub fn get(&self, session_id: &str) -> Option<Arc<AxeTables>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .map(Arc::clone)
    }
}
