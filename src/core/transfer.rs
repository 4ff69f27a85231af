//! Transfer orchestration
//!
//! `process` in the current protocol: resolve the listing, pay the seller
//! through the bean contract, then decrypt the payload and store it under
//! `<listing>key`. The payment is never undone. If anything after it
//! fails, the beans have moved and no result is stored.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};

use crate::aliases::PlainText;
use crate::config::Config;
use crate::core::keys::result_key;
use crate::core::kv::put_state;
use crate::core::listing::resolve_listing;
use crate::core::Result;
use crate::crypto::BlockCodec;
use crate::error::LedgerError;
use crate::external::ContractInvoker;
use crate::state::LedgerState;

/// Where and how the payment is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSettings {
    pub contract: String,
    pub function: String,
    /// Sent instead of the stored listing price when set. The listing price
    /// is still looked up and must exist.
    pub price_override: Option<String>,
}

impl TransferSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            contract: config.transfer.contract.clone(),
            function: config.transfer.function.clone(),
            price_override: config.transfer.price_override.clone(),
        }
    }
}

pub struct TransferOrchestrator {
    codec: BlockCodec,
    settings: TransferSettings,
}

impl TransferOrchestrator {
    pub fn new(codec: BlockCodec, settings: TransferSettings) -> Self {
        Self { codec, settings }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            BlockCodec::from_config(config)?,
            TransferSettings::from_config(config),
        ))
    }

    /// Run a transfer for `listing_id` paid by `buyer`.
    ///
    /// Returns the base64 text that was stored under `<listing_id>key`.
    /// Submitting the same payload twice pays twice.
    pub fn process<S, C>(
        &self,
        state: &mut S,
        contracts: &mut C,
        encoded_ciphertext: &str,
        listing_id: &str,
        buyer: &str,
    ) -> Result<Vec<u8>>
    where
        S: LedgerState + ?Sized,
        C: ContractInvoker + ?Sized,
    {
        let ciphertext = STANDARD.decode(encoded_ciphertext)?;
        debug!(listing_id, len = ciphertext.len(), "decoded transfer payload");

        let listing = resolve_listing(state, listing_id)?;
        let price = self
            .settings
            .price_override
            .as_deref()
            .unwrap_or(&listing.price);

        contracts
            .invoke_contract(
                &self.settings.contract,
                &self.settings.function,
                &[buyer, listing.seller.as_str(), price],
            )
            .map_err(|source| LedgerError::ExternalCall {
                contract: self.settings.contract.clone(),
                function: self.settings.function.clone(),
                source,
            })?;
        info!(listing_id, buyer, seller = %listing.seller, price, "bean transfer completed");

        let stored = self
            .decrypt_and_encode(&ciphertext)
            .and_then(|encoded| {
                put_state(state, &result_key(listing_id), &encoded)?;
                Ok(encoded)
            })
            .inspect_err(|err| {
                warn!(listing_id, error = %err, "transfer completed but result was not stored");
            })?;

        Ok(stored)
    }

    /// Decrypt-only `process` of the legacy protocol: no payment, nothing
    /// stored, raw plaintext returned
    pub fn decrypt_payload(&self, encoded_ciphertext: &str) -> Result<PlainText> {
        let ciphertext = STANDARD.decode(encoded_ciphertext)?;
        debug!(len = ciphertext.len(), "decoded payload");
        self.codec.decrypt_blocks(&ciphertext)
    }

    fn decrypt_and_encode(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let plaintext = self.codec.decrypt_blocks(ciphertext)?;
        Ok(STANDARD.encode(plaintext.expose_secret()).into_bytes())
    }
}
