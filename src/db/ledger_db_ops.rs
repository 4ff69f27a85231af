//! SQLite-backed ledger namespace
//!
//! Every put appends a new version to `state_history`; the trigger created
//! by `open_ledger_db` keeps `world_state` pointing at the latest one.
//! Each put commits on its own. Grouping several puts into one atomic unit
//! is the host's job, so a failed second put leaves the first in place.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StateError;
use crate::state::LedgerState;

/// One row of a key's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVersion {
    pub version: i64,
    pub value: Vec<u8>,
    pub written_at: String,
}

/// Current value of a key together with its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub key: String,
    pub value: Vec<u8>,
    pub version: i64,
    pub updated_at: String,
}

/// A [`LedgerState`] over one namespace of a ledger database
pub struct SqliteState<'c> {
    conn: &'c Connection,
    namespace: String,
}

impl<'c> SqliteState<'c> {
    pub fn new(conn: &'c Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// All versions ever written for `key`, oldest first
    pub fn history(&self, key: &str) -> Result<Vec<StateVersion>, StateError> {
        let mut stmt = self.conn.prepare(
            "SELECT version, value, written_at FROM state_history
             WHERE namespace = ?1 AND key = ?2
             ORDER BY version",
        )?;
        let rows = stmt.query_map(params![self.namespace, key], |row| {
            Ok(StateVersion {
                version: row.get(0)?,
                value: row.get(1)?,
                written_at: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Current entries of the namespace, ordered by key
    pub fn entries(&self) -> Result<Vec<StateEntry>, StateError> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value, version, updated_at FROM world_state
             WHERE namespace = ?1
             ORDER BY key",
        )?;
        let rows = stmt.query_map([&self.namespace], |row| {
            Ok(StateEntry {
                key: row.get(0)?,
                value: row.get(1)?,
                version: row.get(2)?,
                updated_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl LedgerState for SqliteState<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM world_state WHERE namespace = ?1 AND key = ?2",
                params![self.namespace, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        let tx = self.conn.unchecked_transaction()?;
        // Get next version number
        let version: i64 = tx.query_row(
            "SELECT COALESCE(MAX(version), 0) + 1 FROM state_history
             WHERE namespace = ?1 AND key = ?2",
            params![self.namespace, key],
            |row| row.get(0),
        )?;
        tx.execute(
            "INSERT INTO state_history (namespace, key, version, value)
             VALUES (?1, ?2, ?3, ?4)",
            params![self.namespace, key, version, value],
        )?;
        tx.commit()?;
        Ok(())
    }
}
