// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: protocol variant,
//! key-material encoding, invocation kind and listing fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two observed protocol revisions.
///
/// They differ in IV length and in which operations are routed; see
/// [`crate::dispatch::Router::for_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVariant {
    /// 8-byte IV, `process` is a decrypt-only query
    Legacy,
    /// 16-byte IV, `process` runs the full transfer
    #[default]
    Current,
}

impl FromStr for ProtocolVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "current" => Ok(Self::Current),
            other => Err(format!("unknown protocol variant '{other}'")),
        }
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// How `[cipher]` key and IV strings are turned into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialEncoding {
    /// Raw UTF-8 bytes of the string
    #[default]
    Utf8,
    Hex,
}

/// Whether the runtime called us to mutate state or only to read it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    Invoke,
    Query,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke => f.write_str("invocation"),
            Self::Query => f.write_str("query"),
        }
    }
}

/// The two co-located entries that make up a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Seller,
    Price,
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seller => f.write_str("seller"),
            Self::Price => f.write_str("price"),
        }
    }
}
