//! Test assertion helpers.

use pgpdrop::Error;

/// Assert that a result failed with `KeyNotFound`.
pub fn assert_key_not_found<T: std::fmt::Debug>(result: pgpdrop::Result<T>) {
    match result {
        Err(Error::KeyNotFound(_)) => {}
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

/// Assert that a result failed with `ProtocolViolation`.
pub fn assert_protocol_violation<T: std::fmt::Debug>(result: pgpdrop::Result<T>) {
    match result {
        Err(Error::ProtocolViolation(_)) => {}
        other => panic!("expected ProtocolViolation, got {:?}", other),
    }
}

/// Assert that `message` is one armored PGP MESSAGE block.
pub fn assert_armored_message(message: &[u8]) {
    let text = std::str::from_utf8(message).expect("armored output is not UTF-8");
    assert!(
        text.starts_with("-----BEGIN PGP MESSAGE-----\n"),
        "bad armor header: {}",
        text
    );
    assert!(
        text.trim_end().ends_with("-----END PGP MESSAGE-----"),
        "bad armor footer: {}",
        text
    );
}

/// Assert that a result failed with the one message given for every
/// session key that cannot be recovered.
pub fn assert_session_key_unavailable<T: std::fmt::Debug>(result: pgpdrop::Result<T>) {
    match result {
        Err(err @ Error::KeyNotFound(_)) => assert_eq!(
            err.to_string(),
            "key not found: cannot recover the session key with the selected key"
        ),
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}
