// src/error.rs
//! Public error types for the entire crate
//!
//! `Display` of [`LedgerError`] is the exact failure text handed back to the
//! runtime, so several messages keep their historical JSON-ish shape.

use thiserror::Error;

use crate::enums::{InvocationKind, ListingField};

/// Failure reported by a state backend
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("{0}")]
    Backend(String),
}

/// Failure reported by an external contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvokeError(pub String);

impl From<&str> for InvokeError {
    fn from(msg: &str) -> Self {
        InvokeError(msg.to_owned())
    }
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("{{\"Error\":\"Failed to get state for {0}\"}}")]
    KeyNotFound(String),

    #[error("{{\"Error\":\"Failed to get {field} for listing {listing_id}\"}}")]
    ListingNotFound {
        listing_id: String,
        field: ListingField,
    },

    #[error("{{\"Error\":\"Failed to Decode enckey\"}}")]
    Decode(#[from] base64::DecodeError),

    #[error("ciphertext length {0} is not a positive multiple of the block size")]
    InvalidCiphertextLength(usize),

    #[error("Cipher error: {0}")]
    Cipher(String),

    #[error("Failed to invoke {contract}.{function}: {source}")]
    ExternalCall {
        contract: String,
        function: String,
        #[source]
        source: InvokeError,
    },

    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    StateRead {
        key: String,
        #[source]
        source: StateError,
    },

    #[error("Failed to put state for {key}: {source}")]
    StateWrite {
        key: String,
        #[source]
        source: StateError,
    },

    #[error("Received unknown function {kind}: {name}")]
    UnknownFunction { kind: InvocationKind, name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("State backend error: {0}")]
    State(#[from] StateError),
}
