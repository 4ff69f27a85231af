// tests/core/transfer.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bean_ledger::core::{define_listing, read, TransferOrchestrator, TransferSettings};
use bean_ledger::error::LedgerError;
use bean_ledger::{BlockCodec, Config, LedgerState, ListingField, MemoryState, ProtocolVariant};

use crate::common::{
    setup, Call, FailingState, RecordingInvoker, SAMPLE_CIPHERTEXT_B64, SAMPLE_PLAINTEXT,
    SAMPLE_STORED,
};

fn orchestrator(price_override: Option<&str>) -> TransferOrchestrator {
    let config = Config::for_variant(ProtocolVariant::Current);
    let settings = TransferSettings {
        price_override: price_override.map(str::to_owned),
        ..TransferSettings::from_config(&config)
    };
    TransferOrchestrator::new(BlockCodec::from_config(&config).unwrap(), settings)
}

fn listed_state() -> MemoryState {
    let mut state = MemoryState::new();
    define_listing(&mut state, "L1", "seller1", "100").unwrap();
    state
}

#[test]
fn test_successful_transfer_pays_then_stores_reencoded_plaintext() {
    setup();
    let mut state = listed_state();
    let mut beans = RecordingInvoker::default();

    let out = orchestrator(None)
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap();

    assert_eq!(out, SAMPLE_STORED);
    assert_eq!(read(&state, "L1key").unwrap(), SAMPLE_STORED);
    assert_eq!(STANDARD.decode(&out).unwrap(), SAMPLE_PLAINTEXT);
    assert_eq!(
        beans.calls,
        vec![Call {
            contract: "bean".into(),
            function: "transferBean".into(),
            args: vec!["buyer1".into(), "seller1".into(), "100".into()],
        }]
    );
}

#[test]
fn test_failed_transfer_skips_decrypt_and_persistence() {
    let mut state = listed_state();
    let mut beans = RecordingInvoker::failing("insufficient beans");

    let err = orchestrator(None)
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap_err();

    match err {
        LedgerError::ExternalCall {
            ref contract,
            ref function,
            ref source,
        } => {
            assert_eq!(contract, "bean");
            assert_eq!(function, "transferBean");
            assert_eq!(source.0, "insufficient beans");
        }
        other => panic!("expected ExternalCall, got {other:?}"),
    }
    assert_eq!(state.get_state("L1key").unwrap(), None);
    assert_eq!(beans.calls.len(), 1);
}

#[test]
fn test_failed_transfer_wins_over_bad_ciphertext_length() {
    // 15 bytes: would fail decryption, but the transfer fails first
    let bad = STANDARD.encode([7u8; 15]);
    let mut state = listed_state();
    let mut beans = RecordingInvoker::failing("nope");

    let err = orchestrator(None)
        .process(&mut state, &mut beans, &bad, "L1", "buyer1")
        .unwrap_err();

    assert!(matches!(err, LedgerError::ExternalCall { .. }));
}

#[test]
fn test_invalid_base64_fails_before_any_lookup_or_call() {
    let mut state = MemoryState::new();
    let mut beans = RecordingInvoker::default();

    let err = orchestrator(None)
        .process(&mut state, &mut beans, "not base64!!", "L1", "buyer1")
        .unwrap_err();

    assert!(matches!(err, LedgerError::Decode(_)));
    assert_eq!(err.to_string(), r#"{"Error":"Failed to Decode enckey"}"#);
    assert!(beans.calls.is_empty());
}

#[test]
fn test_missing_listing_entries_stop_before_the_call() {
    let mut beans = RecordingInvoker::default();
    let mut state = MemoryState::new();

    let err = orchestrator(None)
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::ListingNotFound { field: ListingField::Seller, .. }
    ));

    state.put_state("L1guid", b"seller1").unwrap();
    let err = orchestrator(Some("5"))
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap_err();
    // the override does not make the stored price optional
    assert!(matches!(
        err,
        LedgerError::ListingNotFound { field: ListingField::Price, .. }
    ));
    assert!(beans.calls.is_empty());
}

#[test]
fn test_price_override_replaces_listing_price_in_call() {
    let mut state = listed_state();
    let mut beans = RecordingInvoker::default();

    orchestrator(Some("5"))
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap();

    assert_eq!(beans.calls[0].args, vec!["buyer1", "seller1", "5"]);
    assert_eq!(read(&state, "L1price").unwrap(), b"100");
}

#[test]
fn test_bad_length_after_transfer_leaves_payment_and_no_result() {
    let bad = STANDARD.encode([7u8; 20]);
    let mut state = listed_state();
    let mut beans = RecordingInvoker::default();

    let err = orchestrator(None)
        .process(&mut state, &mut beans, &bad, "L1", "buyer1")
        .unwrap_err();

    assert!(matches!(err, LedgerError::InvalidCiphertextLength(20)));
    assert_eq!(beans.calls.len(), 1, "payment is not rolled back");
    assert_eq!(state.get_state("L1key").unwrap(), None);
}

#[test]
fn test_empty_payload_is_invalid_length_after_transfer() {
    let mut state = listed_state();
    let mut beans = RecordingInvoker::default();

    let err = orchestrator(None)
        .process(&mut state, &mut beans, "", "L1", "buyer1")
        .unwrap_err();

    assert!(matches!(err, LedgerError::InvalidCiphertextLength(0)));
    assert_eq!(beans.calls.len(), 1);
}

#[test]
fn test_result_write_failure_after_transfer_is_state_write_error() {
    let mut state = FailingState::failing_on("L1key");
    define_listing(&mut state, "L1", "seller1", "100").unwrap();
    let mut beans = RecordingInvoker::default();

    let err = orchestrator(None)
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap_err();

    assert!(matches!(err, LedgerError::StateWrite { ref key, .. } if key == "L1key"));
    assert_eq!(beans.calls.len(), 1);
}

#[test]
fn test_resubmitting_the_same_payload_pays_twice() {
    let mut state = listed_state();
    let mut beans = RecordingInvoker::default();
    let orch = orchestrator(None);

    let first = orch
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap();
    let second = orch
        .process(&mut state, &mut beans, SAMPLE_CIPHERTEXT_B64, "L1", "buyer1")
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(beans.calls.len(), 2);
}

#[test]
fn test_decrypt_payload_returns_raw_plaintext() {
    let plaintext = orchestrator(None)
        .decrypt_payload(SAMPLE_CIPHERTEXT_B64)
        .unwrap();
    assert_eq!(plaintext.expose_secret().as_slice(), SAMPLE_PLAINTEXT);
}
