// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::aliases::{CipherIv, CipherKey16, DbPassphrase};
use crate::consts::{DEFAULT_CONFIG_FILE, KEY_LEN};
use crate::core::Result;
use crate::enums::{MaterialEncoding, ProtocolVariant};
use crate::error::LedgerError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub protocol: Protocol,
    pub cipher: Cipher,
    #[serde(default = "default_transfer")]
    pub transfer: Transfer,
    #[serde(default = "default_ledger")]
    pub ledger: Ledger,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Protocol {
    #[serde(default)]
    pub variant: ProtocolVariant,
}

/// Fixed codec material. Not a key-management scheme: these values are
/// shared by every deployment of a variant.
#[derive(Debug, Clone, Deserialize)]
pub struct Cipher {
    pub key: String,
    pub iv: String,
    #[serde(default)]
    pub encoding: MaterialEncoding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    pub contract: String,
    #[serde(default = "default_transfer_function")]
    pub function: String,
    /// When set, sent to the bean contract instead of the listing's price
    #[serde(default)]
    pub price_override: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ledger {
    pub path: PathBuf,
    #[serde(default)]
    pub db_key: Option<String>,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Config {
    /// Built-in configuration for one protocol variant
    pub fn for_variant(variant: ProtocolVariant) -> Self {
        Config {
            protocol: Protocol { variant },
            cipher: default_cipher(variant),
            transfer: default_transfer(),
            ledger: default_ledger(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.protocol.variant
    }

    /// Decoded AES key; must be exactly 16 bytes
    pub fn cipher_key(&self) -> Result<CipherKey16> {
        let raw = decode_material(&self.cipher.key, self.cipher.encoding, "key")?;
        let bytes: [u8; KEY_LEN] = raw.as_slice().try_into().map_err(|_| {
            LedgerError::Config(format!(
                "cipher key must be {KEY_LEN} bytes, got {}",
                raw.len()
            ))
        })?;
        Ok(CipherKey16::new(bytes))
    }

    /// Decoded IV. Its length is not checked here: a short IV is reported by
    /// the codec when it is first used.
    pub fn cipher_iv(&self) -> Result<CipherIv> {
        let raw = decode_material(&self.cipher.iv, self.cipher.encoding, "iv")?;
        Ok(CipherIv::new(raw))
    }

    pub fn db_passphrase(&self) -> Option<DbPassphrase> {
        self.ledger.db_key.clone().map(DbPassphrase::new)
    }

    fn validate(&self) -> Result<()> {
        self.cipher_key()?;
        self.cipher_iv()?;
        if self.transfer.contract.is_empty() {
            return Err(LedgerError::Config("transfer.contract is empty".into()));
        }
        if self.transfer.function.is_empty() {
            return Err(LedgerError::Config("transfer.function is empty".into()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(variant) = std::env::var("BEAN_LEDGER_VARIANT") {
            let variant = variant.parse().map_err(LedgerError::Config)?;
            // A default IV follows the variant; key and encoding are kept
            if self.cipher.iv == default_cipher(self.protocol.variant).iv {
                self.cipher.iv = default_cipher(variant).iv;
            }
            self.protocol.variant = variant;
        }
        if let Ok(path) = std::env::var("BEAN_LEDGER_DB") {
            self.ledger.path = PathBuf::from(path);
        }
        if let Ok(key) = std::env::var("BEAN_LEDGER_DB_KEY") {
            self.ledger.db_key = Some(key);
        }
        Ok(())
    }
}

fn decode_material(value: &str, encoding: MaterialEncoding, what: &str) -> Result<Vec<u8>> {
    match encoding {
        MaterialEncoding::Utf8 => Ok(value.as_bytes().to_vec()),
        MaterialEncoding::Hex => hex::decode(value)
            .map_err(|e| LedgerError::Config(format!("cipher {what} is not valid hex: {e}"))),
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once; falls back to the current variant's defaults if the
/// file is missing
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var("BEAN_LEDGER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        Config::load_from(&config_path)?
    } else {
        warn!("{config_path} not found, using built-in defaults");
        Config::for_variant(ProtocolVariant::default())
    };

    conf.apply_env_overrides()?;
    conf.validate()?;

    Ok(CONFIG.get_or_init(|| conf))
}
