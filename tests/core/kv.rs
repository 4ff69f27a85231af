// tests/core/kv.rs
use bean_ledger::core::{get_key, init_secret, read, set_ccid, write};
use bean_ledger::error::LedgerError;
use bean_ledger::{LedgerState, MemoryState};

#[test]
fn test_read_absent_key_is_key_not_found() {
    let state = MemoryState::new();
    let err = read(&state, "missing").unwrap_err();

    assert!(matches!(err, LedgerError::KeyNotFound(ref k) if k == "missing"));
    assert_eq!(
        err.to_string(),
        r#"{"Error":"Failed to get state for missing"}"#
    );
}

#[test]
fn test_write_then_read_round_trips_exact_bytes() {
    let mut state = MemoryState::new();
    write(&mut state, "k", "välue\u{0}bytes".as_bytes()).unwrap();
    assert_eq!(read(&state, "k").unwrap(), "välue\u{0}bytes".as_bytes());

    write(&mut state, "k", b"second").unwrap();
    assert_eq!(read(&state, "k").unwrap(), b"second");
}

#[test]
fn test_globals_use_fixed_keys() {
    let mut state = MemoryState::new();
    init_secret(&mut state, "s3cret").unwrap();
    set_ccid(&mut state, "eiwquriewuripoq").unwrap();

    assert_eq!(state.get_state("secret").unwrap(), Some(b"s3cret".to_vec()));
    assert_eq!(
        state.get_state("CCID").unwrap(),
        Some(b"eiwquriewuripoq".to_vec())
    );

    // re-init replaces
    init_secret(&mut state, "other").unwrap();
    assert_eq!(read(&state, "secret").unwrap(), b"other");
}

#[test]
fn test_get_key_reads_result_suffix() {
    let mut state = MemoryState::new();
    assert!(matches!(
        get_key(&state, "L1"),
        Err(LedgerError::KeyNotFound(ref k)) if k == "L1key"
    ));

    write(&mut state, "L1key", b"payload").unwrap();
    assert_eq!(get_key(&state, "L1").unwrap(), b"payload");
}
