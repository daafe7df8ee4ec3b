//! Decryption pipeline.
//!
//! Accepts armored or binary messages. The whole packet stream is framed
//! before any key material is touched, so truncation and bad lengths are
//! protocol violations. Marker packets before the session keys are skipped.
//! Only the first session key is tried, and it must be public-key encrypted
//! and addressed to the given key (or to the wildcard id).

use std::borrow::Cow;
use std::io::Read;

use pgp::armor::Dearmor;
use pgp::composed::{DecryptionOptions, Edata, Esk, Message};
use pgp::packet::{PacketParser, PublicKeyEncryptedSessionKey};
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::SESSION_KEY_UNAVAILABLE;
use crate::core::key::PrivateKey;
use crate::error::{Error, Result};

/// Recover the literal payload of `message` with `key`.
pub fn open(message: &[u8], key: &PrivateKey) -> Result<Vec<u8>> {
    let binary = binary(message)?;
    check_framing(&binary)?;
    let message = Message::from_bytes(&binary[..])
        .map_err(|e| Error::protocol(format!("unreadable message: {}", e)))?;

    let Message::Encrypted { esk, mut edata, .. } = message else {
        return Err(Error::protocol("no encrypted data list found"));
    };
    trace!(session_keys = esk.len(), "found encrypted data list");

    let pkesk = match esk.first() {
        Some(Esk::PublicKeyEncryptedSessionKey(pkesk)) => pkesk,
        Some(Esk::SymKeyEncryptedSessionKey(_)) => {
            return Err(Error::protocol(
                "first session key packet is symmetric-key encrypted, not public-key encrypted",
            ))
        }
        None => return Err(Error::protocol("encrypted data without a session key packet")),
    };
    if !pkesk.match_identity(key.public()) {
        return Err(Error::key_not_found(format!(
            "message is not encrypted to {}",
            key.key_id()
        )));
    }

    let plaintext = recover_plaintext(pkesk, &mut edata, key)?;

    let compressed = Message::from_bytes(&plaintext[..])
        .map_err(|e| Error::protocol(format!("unreadable encrypted data: {}", e)))?;
    if !compressed.is_compressed() {
        return Err(Error::protocol(
            "expected compressed data inside encrypted data",
        ));
    }
    let mut literal = compressed
        .decompress()
        .map_err(|e| Error::protocol(format!("cannot decompress: {}", e)))?;
    if !literal.is_literal() {
        return Err(Error::protocol(
            "expected literal data inside compressed data",
        ));
    }
    if let Some(header) = literal.literal_data_header() {
        trace!(
            filename = %String::from_utf8_lossy(header.file_name()),
            created = header.created().as_secs(),
            "reading literal data"
        );
    }

    let payload = literal
        .as_data_vec()
        .map_err(|e| Error::protocol(format!("unreadable literal data: {}", e)))?;
    trace!(len = payload.len(), "message opened");
    Ok(payload)
}

/// The binary packet stream of `message`, dearmoring it if the first octet
/// is not a packet tag.
fn binary(message: &[u8]) -> Result<Cow<'_, [u8]>> {
    match message.first() {
        None => Err(Error::protocol("empty message")),
        Some(octet) if octet & 0x80 != 0 => Ok(Cow::Borrowed(message)),
        Some(_) => {
            let mut binary = Vec::new();
            Dearmor::new(message)
                .read_to_end(&mut binary)
                .map_err(|e| Error::protocol(format!("invalid armor: {}", e)))?;
            Ok(Cow::Owned(binary))
        }
    }
}

/// Parse every packet header and body once.
fn check_framing(binary: &[u8]) -> Result<()> {
    let mut packets = 0usize;
    for packet in PacketParser::new(binary) {
        packet.map_err(|e| Error::protocol(format!("malformed packet {}: {}", packets, e)))?;
        packets += 1;
    }
    if packets == 0 {
        return Err(Error::protocol("no packets found"));
    }
    trace!(packets, "packet stream framed");
    Ok(())
}

/// Unwrap the session key and decrypt the encrypted data.
///
/// Every failure here is the same `KeyNotFound`, whatever the step: RSA
/// padding, session key checksum, cipher or modification detection code.
fn recover_plaintext(
    pkesk: &PublicKeyEncryptedSessionKey,
    edata: &mut Edata<'_>,
    key: &PrivateKey,
) -> Result<Zeroizing<Vec<u8>>> {
    let session_key = key.decrypt_session_key(pkesk).map_err(unrecoverable)?;
    edata
        .decrypt_permissive(&session_key, DecryptionOptions::new().enable_legacy())
        .map_err(unrecoverable)?;

    let mut plaintext = Zeroizing::new(Vec::new());
    edata.read_to_end(&mut plaintext).map_err(unrecoverable)?;
    Ok(plaintext)
}

fn unrecoverable<E>(_: E) -> Error {
    Error::key_not_found(SESSION_KEY_UNAVAILABLE)
}
