//! Encryption pipeline.
//!
//! ```text
//! payload -> literal -> compressed -> SEIPD (or SED) -> armor
//!                                      ^
//!                        PKESK(session key, recipient)
//! ```

use std::io::Write;

use flate2::write::{DeflateEncoder, ZlibEncoder};
use pgp::armor::{self, BlockType};
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::packet::{
    CompressedData, Packet, PacketHeader, PublicKeyEncryptedSessionKey, SymEncryptedData,
    SymEncryptedProtectedData,
};
use pgp::ser::Serialize;
use pgp::types::{CompressionAlgorithm, Tag};
use rand::{CryptoRng, RngCore};
use tracing::{trace, warn};
use zeroize::Zeroizing;

use crate::core::config::{Compression, Settings};
use crate::core::key::PublicKey;
use crate::core::literal;
use crate::error::{Error, Result};

/// Encrypt `payload` to `recipient` and armor the result.
pub fn seal<R: RngCore + CryptoRng>(
    payload: &[u8],
    recipient: &PublicKey,
    settings: &Settings,
    rng: &mut R,
) -> Result<Vec<u8>> {
    if !recipient.can_encrypt() {
        return Err(Error::key_not_found(format!(
            "{} cannot be used for encryption",
            recipient.key_id()
        )));
    }

    let literal = Zeroizing::new(to_bytes(Packet::from(literal::build(payload)?))?);
    let compressed = compress(&literal, settings.compression)?;
    let inner = Zeroizing::new(to_bytes(Packet::from(compressed))?);

    let algorithm = SymmetricKeyAlgorithm::from(settings.cipher);
    let session_key = algorithm.new_session_key(&mut *rng);
    let pkesk = PublicKeyEncryptedSessionKey::from_session_key_v3(
        &mut *rng,
        &session_key,
        algorithm,
        recipient,
    )
    .map_err(|e| Error::key_not_found(format!("cannot encrypt to {}: {}", recipient.key_id(), e)))?;

    let data = if settings.integrity_protection {
        SymEncryptedProtectedData::encrypt_seipdv1(
            &mut *rng,
            algorithm,
            session_key.as_ref(),
            &inner,
        )
        .map(Packet::from)
        .map_err(|e| Error::protocol(format!("cannot encrypt data: {}", e)))?
    } else {
        warn!("encrypting without integrity protection");
        let body = algorithm
            .encrypt(&mut *rng, session_key.as_ref(), &inner)
            .map_err(|e| Error::protocol(format!("cannot encrypt data: {}", e)))?;
        SymEncryptedData::try_from_reader(header(Tag::SymEncryptedData, body.len())?, &body[..])
            .map(Packet::from)
            .map_err(|e| Error::protocol(format!("cannot frame encrypted data: {}", e)))?
    };

    let mut message = Vec::new();
    armor::write(
        &vec![Packet::from(pkesk), data],
        BlockType::Message,
        &mut message,
        None,
        true,
    )
    .map_err(|e| Error::protocol(format!("cannot armor message: {}", e)))?;

    trace!(
        payload_len = payload.len(),
        message_len = message.len(),
        cipher = ?settings.cipher,
        "message sealed"
    );
    Ok(message)
}

/// Deflate `data` into a compressed data packet.
fn compress(data: &[u8], compression: Compression) -> Result<CompressedData> {
    let mut body = vec![u8::from(CompressionAlgorithm::from(compression))];
    body = match compression {
        Compression::Zip => {
            let mut encoder = DeflateEncoder::new(body, flate2::Compression::default());
            encoder.write_all(data)?;
            encoder.finish()?
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(body, flate2::Compression::default());
            encoder.write_all(data)?;
            encoder.finish()?
        }
    };

    CompressedData::try_from_reader(header(Tag::CompressedData, body.len())?, &body[..])
        .map_err(|e| Error::protocol(format!("cannot frame compressed data: {}", e)))
}

/// A new-format header with a definite length.
fn header(tag: Tag, len: usize) -> Result<PacketHeader> {
    let len = u32::try_from(len)
        .map_err(|_| Error::protocol(format!("{:?} body of {} bytes is too long", tag, len)))?;
    Ok(PacketHeader::new_fixed(tag, len))
}

fn to_bytes(packet: Packet) -> Result<Vec<u8>> {
    packet
        .to_bytes()
        .map_err(|e| Error::protocol(format!("cannot serialize packet: {}", e)))
}
