//! Literal data packets (tag 11).
//!
//! The innermost packet of every message this crate writes: binary format,
//! the filename `_CONSOLE`, the current time and the payload bytes as-is.

use pgp::bytes::Bytes;
use pgp::packet::LiteralData;

use crate::core::constants::LITERAL_FILENAME;
use crate::error::{Error, Result};

/// Wrap `payload` in a binary literal packet named `_CONSOLE`, stamped with
/// the current time.
///
/// # Errors
///
/// `ProtocolViolation` if the payload does not fit one packet length.
pub fn build(payload: &[u8]) -> Result<LiteralData> {
    LiteralData::from_bytes(LITERAL_FILENAME, Bytes::copy_from_slice(payload))
        .map_err(|e| Error::protocol(format!("cannot build literal data: {}", e)))
}
