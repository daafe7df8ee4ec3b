//! OpenPGP cipher backend.
//!
//! Encrypts to a single recipient and decrypts with one unlocked private
//! key. Every call logs the payload at `info` after passing it
//! through the redactor, which is the identity unless replaced.

use std::fmt;
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{info, trace};

use super::{decrypt, encrypt, Cipher};
use crate::core::config::Settings;
use crate::core::key::{PrivateKey, PublicKey};
use crate::error::Result;

/// Maps payload text to what may appear in logs.
pub type Redactor = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// OpenPGP backend configured by [`Settings`].
#[derive(Clone)]
pub struct OpenPgp {
    settings: Settings,
    redactor: Redactor,
}

impl OpenPgp {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            redactor: Arc::new(|text: &str| text.to_string()),
        }
    }

    /// Replace the function applied to payload text before it is logged.
    pub fn with_redactor<F>(mut self, redactor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.redactor = Arc::new(redactor);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Encrypt with a caller-supplied random number generator.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if `recipient` cannot be encrypted to.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        payload: &[u8],
        recipient: &PublicKey,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!(
            payload_len = payload.len(),
            key_id = %recipient.key_id(),
            "encrypting"
        );
        self.log_payload("encrypting payload", payload);
        encrypt::seal(payload, recipient, &self.settings, rng)
    }

    fn log_payload(&self, message: &str, payload: &[u8]) {
        let redacted = (self.redactor)(&String::from_utf8_lossy(payload));
        info!(payload = %redacted, "{}", message);
    }
}

impl Default for OpenPgp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl fmt::Debug for OpenPgp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenPgp")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Cipher for OpenPgp {
    type Recipient = PublicKey;
    type Identity = PrivateKey;

    fn name(&self) -> &'static str {
        "openpgp"
    }

    fn encrypt(&self, payload: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
        self.encrypt_with_rng(payload, recipient, &mut OsRng)
    }

    fn decrypt(&self, message: &[u8], identity: &PrivateKey) -> Result<Vec<u8>> {
        trace!(
            message_len = message.len(),
            key_id = %identity.key_id(),
            "decrypting"
        );
        let payload = decrypt::open(message, identity)?;
        self.log_payload("decrypted payload", &payload);
        Ok(payload)
    }
}
