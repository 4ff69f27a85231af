// src/crypto/mod.rs
//! Fixed-key AES-128-CBC codec. No I/O, no ledger access
//!
//! Every deployment of a protocol variant shares the same key and IV, so
//! this provides no confidentiality. It exists to reproduce the transfer
//! payload format bit for bit.
//!
//! No padding scheme is applied: input must already be a positive multiple
//! of [`BLOCK_SIZE`].
mod decrypt;
mod encrypt;

use crate::aliases::{CipherIv, CipherKey16};
use crate::config::Config;
use crate::consts::BLOCK_SIZE;
use crate::core::Result;
use crate::error::LedgerError;

pub(crate) type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
pub(crate) type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;

/// Key and IV for one protocol variant
pub struct BlockCodec {
    key: CipherKey16,
    iv: CipherIv,
}

impl BlockCodec {
    pub fn new(key: CipherKey16, iv: CipherIv) -> Self {
        Self { key, iv }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.cipher_key()?, config.cipher_iv()?))
    }

    pub fn iv_len(&self) -> usize {
        self.iv.expose_secret().len()
    }

    fn iv_error(&self) -> LedgerError {
        LedgerError::Cipher(format!(
            "IV length must equal block size ({BLOCK_SIZE}), got {}",
            self.iv_len()
        ))
    }
}

/// CBC without padding works in whole blocks only
pub fn check_block_alignment(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(LedgerError::InvalidCiphertextLength(len));
    }
    Ok(())
}
