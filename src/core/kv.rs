//! Plain key/value operations and the two global entries
//!
//! Thin pass-throughs to the state accessor. They exist as named
//! operations because the transfer path relies on the same key names.

use tracing::debug;

use crate::consts::{CCID_KEY, SECRET_KEY};
use crate::core::keys::result_key;
use crate::core::Result;
use crate::error::LedgerError;
use crate::state::LedgerState;

/// Read a key that may be absent
pub(crate) fn get_state<S: LedgerState + ?Sized>(state: &S, key: &str) -> Result<Option<Vec<u8>>> {
    state.get_state(key).map_err(|source| LedgerError::StateRead {
        key: key.to_owned(),
        source,
    })
}

pub(crate) fn put_state<S: LedgerState + ?Sized>(
    state: &mut S,
    key: &str,
    value: &[u8],
) -> Result<()> {
    debug!(key, len = value.len(), "put state");
    state
        .put_state(key, value)
        .map_err(|source| LedgerError::StateWrite {
            key: key.to_owned(),
            source,
        })
}

/// Store the global secret; calling it again replaces the value
pub fn init_secret<S: LedgerState + ?Sized>(state: &mut S, value: &str) -> Result<()> {
    put_state(state, SECRET_KEY, value.as_bytes())
}

/// Unconditional overwrite
pub fn write<S: LedgerState + ?Sized>(state: &mut S, key: &str, value: &[u8]) -> Result<()> {
    put_state(state, key, value)
}

pub fn read<S: LedgerState + ?Sized>(state: &S, key: &str) -> Result<Vec<u8>> {
    get_state(state, key)?.ok_or_else(|| LedgerError::KeyNotFound(key.to_owned()))
}

pub fn set_ccid<S: LedgerState + ?Sized>(state: &mut S, value: &str) -> Result<()> {
    write(state, CCID_KEY, value.as_bytes())
}

/// Payload stored by a completed transfer for listing `id`
pub fn get_key<S: LedgerState + ?Sized>(state: &S, id: &str) -> Result<Vec<u8>> {
    read(state, &result_key(id))
}
