// tests/core/keys.rs
use bean_ledger::core::{price_key, result_key, seller_key};
use proptest::prelude::*;

#[test]
fn test_composite_keys_for_listing_l1() {
    assert_eq!(seller_key("L1"), "L1guid");
    assert_eq!(price_key("L1"), "L1price");
    assert_eq!(result_key("L1"), "L1key");
}

#[test]
fn test_no_normalization_is_applied() {
    assert_eq!(seller_key(" L1 "), " L1 guid");
    assert_eq!(result_key("ünï"), "ünïkey");
}

proptest! {
    #[test]
    fn composite_keys_start_with_the_identifier(id in ".*") {
        prop_assert!(seller_key(&id).starts_with(&id));
        prop_assert!(price_key(&id).starts_with(&id));
        prop_assert_eq!(result_key(&id).len(), id.len() + 3);
    }
}
