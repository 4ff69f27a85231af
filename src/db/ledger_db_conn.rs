// src/db/ledger_db_conn.rs
use crate::aliases::DbPassphrase;
use crate::consts::DB_KDF_ITERATIONS;
use rusqlite::{Connection, Result};
use std::{fs, path::Path};

/// Open (or create) the ledger database and make sure the schema exists.
///
/// With a passphrase the file is SQLCipher-encrypted; without one it is a
/// plain SQLite file.
pub fn open_ledger_db<P: AsRef<Path>>(
    db_path: P,
    passphrase: Option<&DbPassphrase>,
) -> Result<Connection> {
    if let Some(parent) = db_path.as_ref().parent() {
        let _ = fs::create_dir_all(parent);
    }

    let conn = Connection::open(db_path.as_ref())?;

    if let Some(passphrase) = passphrase {
        let key = passphrase.expose_secret().replace('\'', "''");
        conn.execute_batch(&format!("PRAGMA key = '{key}';"))?;
        conn.execute_batch(&format!(
            r#"
            PRAGMA cipher_page_size = 4096;
            PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
            PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
            PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
            PRAGMA cipher_plaintext_header_size = 0;
            "#
        ))?;
    }

    init_schema(&conn)?;
    Ok(conn)
}

/// Unencrypted in-memory ledger, mostly for tests
pub fn open_in_memory_ledger_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS world_state (
            namespace  TEXT NOT NULL,
            key        TEXT NOT NULL,
            value      BLOB NOT NULL,
            version    INTEGER NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (namespace, key)
        );

        CREATE TABLE IF NOT EXISTS state_history (
            namespace  TEXT NOT NULL,
            key        TEXT NOT NULL,
            version    INTEGER NOT NULL,
            value      BLOB NOT NULL,
            written_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (namespace, key, version)
        );

        CREATE INDEX IF NOT EXISTS idx_state_history_key ON state_history(namespace, key);

        -- Keep `world_state` always in sync with the latest version
        CREATE TRIGGER IF NOT EXISTS sync_world_state_after_insert
        AFTER INSERT ON state_history
        BEGIN
            INSERT OR REPLACE INTO world_state (namespace, key, value, version, updated_at)
            VALUES (NEW.namespace, NEW.key, NEW.value, NEW.version, NEW.written_at);
        END;
        "#,
    )
}
