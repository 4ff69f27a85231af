// src/crypto/encrypt.rs
use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};

use super::{check_block_alignment, Aes128CbcEnc, BlockCodec};
use crate::aliases::CypherText;
use crate::core::Result;
use crate::error::LedgerError;

impl BlockCodec {
    /// Inverse of [`BlockCodec::decrypt_blocks`]; same alignment rule.
    ///
    /// The contract itself never encrypts. This is here for clients that
    /// build `process` payloads.
    pub fn encrypt_blocks(&self, plaintext: &[u8]) -> Result<CypherText> {
        check_block_alignment(plaintext.len())?;

        let encryptor =
            Aes128CbcEnc::new_from_slices(self.key.expose_secret(), self.iv.expose_secret())
                .map_err(|_| self.iv_error())?;

        let mut buf = plaintext.to_vec();
        let msg_len = buf.len();
        let len = encryptor
            .encrypt_padded_mut::<NoPadding>(&mut buf, msg_len)
            .map_err(|_| LedgerError::Cipher("plaintext is not block aligned".into()))?
            .len();
        buf.truncate(len);
        Ok(CypherText::new(buf))
    }
}
