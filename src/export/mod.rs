// src/export/mod.rs
//! Export utilities for bean-ledger
//!
//! Snapshots are plaintext: they carry the secret and every
//! stored payload.

pub use json::{export_state_to_json, state_digest};

pub mod json;
