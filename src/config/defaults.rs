// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Cipher, Ledger, Transfer};
use crate::consts::{
    CURRENT_CIPHER_IV, DEFAULT_CIPHER_KEY, DEFAULT_NAMESPACE, DEFAULT_TRANSFER_CONTRACT,
    DEFAULT_TRANSFER_FUNCTION, LEGACY_CIPHER_IV,
};
use crate::enums::{MaterialEncoding, ProtocolVariant};

pub fn default_cipher(variant: ProtocolVariant) -> Cipher {
    let iv = match variant {
        ProtocolVariant::Legacy => LEGACY_CIPHER_IV,
        ProtocolVariant::Current => CURRENT_CIPHER_IV,
    };
    Cipher {
        key: DEFAULT_CIPHER_KEY.into(),
        iv: iv.into(),
        encoding: MaterialEncoding::Utf8,
    }
}

pub fn default_transfer() -> Transfer {
    Transfer {
        contract: DEFAULT_TRANSFER_CONTRACT.into(),
        function: default_transfer_function(),
        price_override: None,
    }
}

pub fn default_transfer_function() -> String {
    DEFAULT_TRANSFER_FUNCTION.into()
}

pub fn default_namespace() -> String {
    DEFAULT_NAMESPACE.into()
}

pub fn default_ledger() -> Ledger {
    let path = dirs::data_local_dir()
        .map(|dir| dir.join("bean-ledger").join("ledger.db"))
        .unwrap_or_else(|| PathBuf::from("data/ledger.db"));
    Ledger {
        path,
        db_key: None,
        namespace: default_namespace(),
    }
}
