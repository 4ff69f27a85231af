// src/state.rs
//! State accessor seam
//!
//! The contract never talks to a storage engine directly. Whatever runs it
//! hands in a [`LedgerState`] scoped to the invoking transaction's
//! namespace; transaction boundaries belong to that host, not to us.

use std::collections::BTreeMap;

use crate::error::StateError;

/// Key/value view of one ledger namespace.
///
/// `get_state` returns `Ok(None)` for absent keys; `Err` is reserved for
/// backend failures.
pub trait LedgerState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError>;
}

impl<S: LedgerState + ?Sized> LedgerState for &mut S {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        (**self).put_state(key, value)
    }
}

/// In-memory namespace for tests and in-process hosts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl LedgerState for MemoryState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}
