//! pgpdrop - Single-recipient OpenPGP encryption for byte payloads.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/             # Core library components
//! │   ├── cipher/       # Encryption backends
//! │   │   ├── mod       # Cipher trait, ring-based helpers
//! │   │   ├── openpgp   # OpenPGP backend and payload redaction
//! │   │   ├── encrypt   # literal -> compressed -> encrypted -> armor
//! │   │   └── decrypt   # the reverse, armored or binary input
//! │   ├── config        # Settings (cipher, compression, integrity)
//! │   ├── key           # Public, secret and unlocked keys
//! │   ├── keyring       # Key-ring parsing and key selection
//! │   └── literal       # Literal data packet builder
//! ├── error             # Error types
//! └── logging           # tracing subscriber setup
//! ```
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> pgpdrop::error::Result<()> {
//! let public_ring = std::fs::read("alice.pub.asc")?;
//! let secret_ring = std::fs::read("alice.sec.asc")?;
//!
//! let message = pgpdrop::encrypt(b"hello world", &public_ring)?;
//! assert!(message.starts_with(b"-----BEGIN PGP MESSAGE-----"));
//!
//! let payload = pgpdrop::decrypt(&message, &secret_ring)?;
//! assert_eq!(payload, b"hello world");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - Any recipient algorithm the `pgp` crate can encrypt to (RSA in practice)
//! - AES-128/192/256 and CAST5 session keys
//! - SEIPD with modification detection, legacy SED on request
//! - ZLIB or ZIP compression
//! - Key selection by capability from gpg-exported key rings
//! - Unprotected and empty-passphrase S2K protected secret keys

pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::cipher::{decrypt, encrypt, Cipher, OpenPgp, Redactor};
pub use crate::core::config::{Compression, Settings, SymmetricAlgorithm};
pub use crate::core::key::{PrivateKey, PublicKey, SecretKey};
pub use crate::core::keyring::{
    resolve_private_decryption_key, resolve_public_encryption_key, KeyRing, KeyRingCollection,
};
pub use crate::error::{Error, Result};
