// src/consts.rs
//! Shared constants: ledger key names, suffixes and protocol defaults

/// Global key holding the value passed to `init`
pub const SECRET_KEY: &str = "secret";

/// Global key written by `setCCID`
pub const CCID_KEY: &str = "CCID";

/// Composite-key suffix for a listing's seller address
pub const GUID_SUFFIX: &str = "guid";

/// Composite-key suffix for a listing's asking price
pub const PRICE_SUFFIX: &str = "price";

/// Composite-key suffix for a transfer result
pub const RESULT_SUFFIX: &str = "key";

/// AES block size in bytes; CBC ciphertext must be a positive multiple of it
pub const BLOCK_SIZE: usize = 16;

/// Required AES-128 key length
pub const KEY_LEN: usize = 16;

/// Function name called on the external bean contract
pub const DEFAULT_TRANSFER_FUNCTION: &str = "transferBean";

/// Name of the external bean contract
pub const DEFAULT_TRANSFER_CONTRACT: &str = "bean";

/// Ledger namespace the contract's own state lives in
pub const DEFAULT_NAMESPACE: &str = "ledger";

/// Fixed codec key shared by both protocol variants.
/// Not confidential: it ships with every deployment.
pub const DEFAULT_CIPHER_KEY: &str = "abcdefghijklmnop";

/// Legacy-variant IV (8 bytes, shorter than the AES block)
pub const LEGACY_CIPHER_IV: &str = "abcdefgh";

/// Current-variant IV (one full block)
pub const CURRENT_CIPHER_IV: &str = "abcdefghijklmnop";

/// Default config file, overridable with `BEAN_LEDGER_CONFIG`
pub const DEFAULT_CONFIG_FILE: &str = "ledger-config.toml";

/// KDF iterations for the SQLCipher ledger database
// paid once per open
pub const DB_KDF_ITERATIONS: u32 = 256_000;
