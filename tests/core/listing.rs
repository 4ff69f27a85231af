// tests/core/listing.rs
use bean_ledger::core::{define_listing, read, resolve_listing, Listing};
use bean_ledger::error::LedgerError;
use bean_ledger::{LedgerState, ListingField, MemoryState};
use proptest::prelude::*;

use crate::common::FailingState;

#[test]
fn test_define_listing_writes_both_entries() {
    let mut state = MemoryState::new();
    define_listing(&mut state, "L1", "seller1", "100").unwrap();

    assert_eq!(read(&state, "L1guid").unwrap(), b"seller1");
    assert_eq!(read(&state, "L1price").unwrap(), b"100");
    assert_eq!(
        resolve_listing(&state, "L1").unwrap(),
        Listing {
            seller: "seller1".into(),
            price: "100".into()
        }
    );
}

#[test]
fn test_failed_price_write_keeps_seller_entry() {
    let mut state = FailingState::failing_on("L1price");

    let err = define_listing(&mut state, "L1", "seller1", "100").unwrap_err();

    assert!(matches!(err, LedgerError::StateWrite { ref key, .. } if key == "L1price"));
    // no rollback of the first put
    assert_eq!(
        state.get_state("L1guid").unwrap(),
        Some(b"seller1".to_vec())
    );
    assert_eq!(state.get_state("L1price").unwrap(), None);
}

#[test]
fn test_resolve_reports_missing_seller_before_price() {
    let state = MemoryState::new();
    assert!(matches!(
        resolve_listing(&state, "L1"),
        Err(LedgerError::ListingNotFound { field: ListingField::Seller, .. })
    ));

    let mut state = MemoryState::new();
    state.put_state("L1guid", b"seller1").unwrap();
    let err = resolve_listing(&state, "L1").unwrap_err();
    assert!(matches!(
        err,
        LedgerError::ListingNotFound { ref listing_id, field: ListingField::Price }
            if listing_id == "L1"
    ));
}

proptest! {
    #[test]
    fn define_listing_reads_back(id in "[a-zA-Z0-9-]{0,24}", guid in ".*", price in "[0-9]{1,12}") {
        let mut state = MemoryState::new();
        define_listing(&mut state, &id, &guid, &price).unwrap();

        prop_assert_eq!(read(&state, &format!("{id}guid")).unwrap(), guid.as_bytes());
        prop_assert_eq!(read(&state, &format!("{id}price")).unwrap(), price.as_bytes());
    }
}
