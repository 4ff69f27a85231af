// src/crypto/decrypt.rs
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};

use super::{check_block_alignment, Aes128CbcDec, BlockCodec};
use crate::aliases::PlainText;
use crate::core::Result;
use crate::error::LedgerError;

impl BlockCodec {
    /// Decrypt block-aligned ciphertext in memory.
    ///
    /// Length is checked before the IV, so a misaligned payload reports
    /// `InvalidCiphertextLength` even under a misconfigured IV.
    pub fn decrypt_blocks(&self, ciphertext: &[u8]) -> Result<PlainText> {
        check_block_alignment(ciphertext.len())?;

        let decryptor =
            Aes128CbcDec::new_from_slices(self.key.expose_secret(), self.iv.expose_secret())
                .map_err(|_| self.iv_error())?;

        let mut buf = ciphertext.to_vec();
        let len = decryptor
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| LedgerError::Cipher("ciphertext is not block aligned".into()))?
            .len();
        buf.truncate(len);
        Ok(PlainText::new(buf))
    }
}
