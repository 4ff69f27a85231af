// src/core/mod.rs
pub mod keys;
pub mod kv;
pub mod listing;
pub mod transfer;

pub use keys::*;
pub use kv::*;
pub use listing::*;
pub use transfer::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::LedgerError>;
