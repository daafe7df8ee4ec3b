//! Cryptographic operations.
//!
//! Provides the encryption/decryption abstraction and its OpenPGP
//! implementation.
//!
//! ## Pipelines
//!
//! - **encrypt**: literal data, compression, session key wrapped for one
//!   recipient, symmetric encryption, ASCII armor.
//! - **decrypt**: the same layers peeled off in reverse, from armored or
//!   binary input.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file next to `openpgp.rs`
//! 3. Re-export from this module

use crate::core::keyring::{resolve_private_decryption_key, resolve_public_encryption_key};
use crate::error::Result;

mod decrypt;
mod encrypt;
mod openpgp;

pub use openpgp::{OpenPgp, Redactor};

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption of byte payloads so that callers
/// can hold a backend without knowing its key types.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt a payload for one recipient.
    ///
    /// # Arguments
    ///
    /// * `payload` - The bytes to encrypt
    /// * `recipient` - Recipient public key
    ///
    /// # Returns
    ///
    /// The encrypted message (format depends on backend implementation).
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the recipient cannot be encrypted to.
    fn encrypt(&self, payload: &[u8], recipient: &Self::Recipient) -> Result<Vec<u8>>;

    /// Decrypt a message using a private identity.
    ///
    /// # Arguments
    ///
    /// * `message` - Encrypted message
    /// * `identity` - Private key/identity
    ///
    /// # Returns
    ///
    /// The original payload bytes.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolViolation` for malformed messages and `KeyNotFound`
    /// if the identity cannot recover the session key.
    fn decrypt(&self, message: &[u8], identity: &Self::Identity) -> Result<Vec<u8>>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

// Convenience functions using the default OpenPGP backend
/// Encrypt a payload to the first encryption key of a public key ring.
///
/// This is a convenience wrapper around `OpenPgp::encrypt`.
///
/// # Arguments
///
/// * `payload` - The bytes to encrypt
/// * `public_ring` - Armored or binary public key-ring data
///
/// # Returns
///
/// An ASCII-armored `PGP MESSAGE`.
///
/// # Errors
///
/// Returns `KeyNotFound` if the ring holds no usable encryption key.
pub fn encrypt(payload: &[u8], public_ring: &[u8]) -> Result<Vec<u8>> {
    let recipient = resolve_public_encryption_key(public_ring)?;
    OpenPgp::default().encrypt(payload, &recipient)
}

/// Decrypt a message with the first decryption key of a secret key ring.
///
/// This is a convenience wrapper around `OpenPgp::decrypt`. The key is
/// unlocked with the empty passphrase.
///
/// # Arguments
///
/// * `message` - Armored or binary OpenPGP message
/// * `secret_ring` - Armored or binary secret key-ring data
///
/// # Returns
///
/// The original payload bytes.
///
/// # Errors
///
/// Returns `KeyNotFound` if no key can be selected or unlocked, or the
/// message is for another key, and `ProtocolViolation` if the message is
/// malformed.
pub fn decrypt(message: &[u8], secret_ring: &[u8]) -> Result<Vec<u8>> {
    let identity = resolve_private_decryption_key(secret_ring)?;
    OpenPgp::default().decrypt(message, &identity)
}
