// src/export/json.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};
use blake3::Hasher;
use chrono::Utc;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::core::Result;
use crate::db::{SqliteState, StateEntry};

/// Export the current entries of one ledger namespace to a JSON snapshot.
///
/// Values are standard base64. The digest covers every key and value in
/// key order, so two snapshots of the same state hash identically.
///
/// SECURITY WARNING: the snapshot includes the `secret` entry and every
/// stored transfer payload in the clear.
pub fn export_state_to_json<P: AsRef<Path>>(state: &SqliteState<'_>, path: P) -> Result<usize> {
    let entries = state.entries()?;

    let mut entries_json = Vec::with_capacity(entries.len());
    for StateEntry {
        key,
        value,
        version,
        updated_at,
    } in &entries
    {
        entries_json.push(json!({
            "key": key,
            "value_base64": STANDARD.encode(value),
            "version": version,
            "updated_at": updated_at,
        }));
    }

    let export = json!({
        "export_format": "bean-ledger-state-v1",
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "namespace": state.namespace(),
        "total_entries": entries.len(),
        "state_digest": state_digest(&entries),
        "entries": entries_json,
    });

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    info!(
        "Exported {} entr(ies) → {}",
        entries.len(),
        path.as_ref().display()
    );

    Ok(entries.len())
}

/// BLAKE3 over length-prefixed keys and values, lowercase hex
pub fn state_digest(entries: &[StateEntry]) -> String {
    let mut hasher = Hasher::new();
    for entry in entries {
        hasher.update(&(entry.key.len() as u64).to_le_bytes());
        hasher.update(entry.key.as_bytes());
        hasher.update(&(entry.value.len() as u64).to_le_bytes());
        hasher.update(&entry.value);
    }
    hasher.finalize().to_hex().to_string()
}
