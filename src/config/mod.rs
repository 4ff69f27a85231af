// src/config/mod.rs
//! Configuration system for bean-ledger
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Cipher, Config, Ledger, Protocol, Transfer};

mod app;
mod defaults;
