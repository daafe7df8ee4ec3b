//! Keys selected from a key ring.
//!
//! A [`PublicKey`] is one primary key or subkey together with the key flags
//! of its newest self-signature. A [`SecretKey`] adds secret material that
//! may still be passphrase protected, and a [`PrivateKey`] is a secret key
//! after unlock.

use std::fmt;

use pgp::composed::PlainSessionKey;
use pgp::crypto::public_key::PublicKeyAlgorithm;
use pgp::packet::{self, KeyFlags, PublicKeyEncryptedSessionKey};
use pgp::types::{
    EncryptionKey, EskType, Fingerprint, KeyDetails, KeyId, KeyVersion, Password, PkeskBytes,
    PkeskVersion, PlainSecretParams, PublicParams, Timestamp,
};
use rand::{CryptoRng, Rng};
use tracing::trace;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PublicComponent {
    Primary(packet::PublicKey),
    Subkey(packet::PublicSubkey),
}

macro_rules! with_public {
    ($component:expr, $key:ident => $body:expr) => {
        match $component {
            PublicComponent::Primary($key) => $body,
            PublicComponent::Subkey($key) => $body,
        }
    };
}

/// A public primary key or subkey and the capabilities its self-signatures
/// grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    component: PublicComponent,
    flags: Option<KeyFlags>,
}

impl PublicKey {
    pub(crate) fn primary(key: packet::PublicKey, flags: Option<KeyFlags>) -> Self {
        Self {
            component: PublicComponent::Primary(key),
            flags,
        }
    }

    pub(crate) fn subkey(key: packet::PublicSubkey, flags: Option<KeyFlags>) -> Self {
        Self {
            component: PublicComponent::Subkey(key),
            flags,
        }
    }

    pub fn is_subkey(&self) -> bool {
        matches!(self.component, PublicComponent::Subkey(_))
    }

    pub fn key_id(&self) -> KeyId {
        self.legacy_key_id()
    }

    /// Key flags of the newest self-signature carrying any, if one does.
    pub fn flags(&self) -> Option<&KeyFlags> {
        self.flags.as_ref()
    }

    /// Whether messages may be encrypted to this key.
    ///
    /// Without key flags every capability of the algorithm is granted;
    /// with them, at least one of the two encryption flags is required.
    pub fn can_encrypt(&self) -> bool {
        self.algorithm().can_encrypt()
            && self
                .flags
                .as_ref()
                .is_none_or(|flags| flags.encrypt_comms() || flags.encrypt_storage())
    }

    pub fn can_sign(&self) -> bool {
        self.algorithm().can_sign() && self.flags.as_ref().is_none_or(KeyFlags::sign)
    }

    pub fn can_certify(&self) -> bool {
        !self.is_subkey()
            && self.algorithm().can_sign()
            && self.flags.as_ref().is_none_or(KeyFlags::certify)
    }
}

impl KeyDetails for PublicKey {
    fn version(&self) -> KeyVersion {
        with_public!(&self.component, key => KeyDetails::version(key))
    }

    fn legacy_key_id(&self) -> KeyId {
        with_public!(&self.component, key => KeyDetails::legacy_key_id(key))
    }

    fn fingerprint(&self) -> Fingerprint {
        with_public!(&self.component, key => KeyDetails::fingerprint(key))
    }

    fn algorithm(&self) -> PublicKeyAlgorithm {
        with_public!(&self.component, key => KeyDetails::algorithm(key))
    }

    fn created_at(&self) -> Timestamp {
        with_public!(&self.component, key => KeyDetails::created_at(key))
    }

    fn legacy_v3_expiration_days(&self) -> Option<u16> {
        with_public!(&self.component, key => KeyDetails::legacy_v3_expiration_days(key))
    }

    fn public_params(&self) -> &PublicParams {
        with_public!(&self.component, key => KeyDetails::public_params(key))
    }
}

impl EncryptionKey for PublicKey {
    fn encrypt<R: CryptoRng + Rng>(
        &self,
        rng: R,
        plain: &[u8],
        typ: EskType,
    ) -> pgp::errors::Result<PkeskBytes> {
        with_public!(&self.component, key => EncryptionKey::encrypt(key, rng, plain, typ))
    }
}

#[derive(Debug, Clone)]
enum SecretComponent {
    Primary(packet::SecretKey),
    Subkey(packet::SecretSubkey),
}

/// A secret primary key or subkey, still locked.
#[derive(Debug, Clone)]
pub struct SecretKey {
    component: SecretComponent,
    public: PublicKey,
}

impl SecretKey {
    pub(crate) fn primary(key: packet::SecretKey, flags: Option<KeyFlags>) -> Self {
        let public = PublicKey::primary(key.public_key().clone(), flags);
        Self {
            component: SecretComponent::Primary(key),
            public,
        }
    }

    pub(crate) fn subkey(key: packet::SecretSubkey, flags: Option<KeyFlags>) -> Self {
        let public = PublicKey::subkey(key.public_key().clone(), flags);
        Self {
            component: SecretComponent::Subkey(key),
            public,
        }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn key_id(&self) -> KeyId {
        self.public.key_id()
    }

    /// Whether the secret material is S2K protected.
    pub fn is_protected(&self) -> bool {
        match &self.component {
            SecretComponent::Primary(key) => key.secret_params().is_encrypted(),
            SecretComponent::Subkey(key) => key.secret_params().is_encrypted(),
        }
    }

    /// Decrypt the secret material with `password`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if the password is wrong or the material is damaged.
    pub fn unlock(&self, password: &Password) -> Result<PrivateKey> {
        let unlocked = match &self.component {
            SecretComponent::Primary(key) => key.unlock(password, |_, plain| Ok(plain.clone())),
            SecretComponent::Subkey(key) => key.unlock(password, |_, plain| Ok(plain.clone())),
        };
        let secret = unlocked.and_then(|inner| inner).map_err(|e| {
            Error::key_not_found(format!("cannot unlock secret key {}: {}", self.key_id(), e))
        })?;

        trace!(key_id = %self.key_id(), protected = self.is_protected(), "secret key unlocked");
        Ok(PrivateKey {
            public: self.public.clone(),
            secret,
        })
    }
}

/// An unlocked secret key, ready to recover session keys.
#[derive(Clone)]
pub struct PrivateKey {
    public: PublicKey,
    secret: PlainSecretParams,
}

impl PrivateKey {
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn key_id(&self) -> KeyId {
        self.public.key_id()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.public.fingerprint()
    }

    /// Unwrap the session key carried by `pkesk`.
    pub(crate) fn decrypt_session_key(
        &self,
        pkesk: &PublicKeyEncryptedSessionKey,
    ) -> pgp::errors::Result<PlainSessionKey> {
        let typ = match pkesk.version() {
            PkeskVersion::V6 => EskType::V6,
            _ => EskType::V3_4,
        };
        self.secret
            .decrypt(self.public.public_params(), pkesk.values()?, typ, &self.public)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key_id", &self.key_id())
            .field("subkey", &self.public.is_subkey())
            .finish_non_exhaustive()
    }
}
