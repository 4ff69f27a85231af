//! Listings: a seller address and a price stored under two composite keys

use crate::core::keys::{price_key, seller_key};
use crate::core::kv::{get_state, put_state};
use crate::core::Result;
use crate::enums::ListingField;
use crate::error::LedgerError;
use crate::state::LedgerState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub seller: String,
    pub price: String,
}

/// Write `<id>guid` then `<id>price`.
///
/// Two separate puts: if the price write fails the seller entry stays
/// committed and the error is returned as is.
pub fn define_listing<S: LedgerState + ?Sized>(
    state: &mut S,
    id: &str,
    seller: &str,
    price: &str,
) -> Result<()> {
    put_state(state, &seller_key(id), seller.as_bytes())?;
    put_state(state, &price_key(id), price.as_bytes())?;
    Ok(())
}

/// Look up seller, then price; the first missing entry is reported
pub fn resolve_listing<S: LedgerState + ?Sized>(state: &S, id: &str) -> Result<Listing> {
    let seller = get_state(state, &seller_key(id))?
        .ok_or_else(|| not_found(id, ListingField::Seller))?;
    let price = get_state(state, &price_key(id))?
        .ok_or_else(|| not_found(id, ListingField::Price))?;

    Ok(Listing {
        seller: String::from_utf8_lossy(&seller).into_owned(),
        price: String::from_utf8_lossy(&price).into_owned(),
    })
}

fn not_found(id: &str, field: ListingField) -> LedgerError {
    LedgerError::ListingNotFound {
        listing_id: id.to_owned(),
        field,
    }
}
