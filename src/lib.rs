// src/lib.rs
//! bean-ledger: a small ledger-state contract
//!
//! Features:
//! - Key/value state behind a pluggable accessor (in-memory or SQLCipher)
//! - Listings stored under composite keys
//! - Fixed-key AES-128-CBC payload codec (both protocol variants)
//! - Bean transfers through an external contract, then payload storage

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod crypto;
pub mod db;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod export;
pub mod external;
pub mod state;

// Re-export everything users need at the crate root
pub use aliases::{CipherIv, CipherKey16, CypherText, PlainText};
pub use config::{load as load_config, Config};
pub use crate::core::{Listing, Result as LedgerResult, TransferOrchestrator, TransferSettings};
pub use crypto::BlockCodec;
pub use db::{open_ledger_db, SqliteState};
pub use dispatch::{Chaincode, Operation, Router};
pub use enums::{InvocationKind, ListingField, MaterialEncoding, ProtocolVariant};
pub use error::{InvokeError, LedgerError, StateError};
pub use export::export_state_to_json;
pub use external::{BeanBank, ContractInvoker};
pub use state::{LedgerState, MemoryState};
