//! Composite key scheme
//!
//! Keys are the identifier with a fixed suffix appended. There is no
//! separator and no escaping: a raw `write` to `"L1guid"` replaces the
//! seller of listing `"L1"`, and callers pick identifiers that do not alias.

use crate::consts::{GUID_SUFFIX, PRICE_SUFFIX, RESULT_SUFFIX};

/// `<id>guid`: the listing's seller address
pub fn seller_key(id: &str) -> String {
    format!("{id}{GUID_SUFFIX}")
}

/// `<id>price`: the listing's asking price
pub fn price_key(id: &str) -> String {
    format!("{id}{PRICE_SUFFIX}")
}

/// `<id>key`: where a completed transfer's payload is stored
pub fn result_key(id: &str) -> String {
    format!("{id}{RESULT_SUFFIX}")
}
