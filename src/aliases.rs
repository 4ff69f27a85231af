// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Key material and decrypted payloads live in these wrappers so they are
//! zeroized on drop.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt};

// Fixed-size secrets
fixed_alias!(CipherKey16, 16); // AES-128 transfer codec key

// Dynamic secrets
dynamic_alias!(CipherIv, Vec<u8>); // 8 bytes (legacy) or 16 bytes (current)
dynamic_alias!(CypherText, Vec<u8>);
dynamic_alias!(PlainText, Vec<u8>);
dynamic_alias!(DbPassphrase, String); // SQLCipher `PRAGMA key`
