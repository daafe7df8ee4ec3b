//! Key-ring parsing and key selection.
//!
//! A key-ring collection is any number of transferable keys, armored or
//! binary. Binary input may hold rings back to back; armored input is read
//! up to the end of its first block. Capabilities come from the key flags of
//! the self-signatures, and the newest signature carrying flags wins.
//!
//! Selection is first-match in ring order, primary before subkeys.

use pgp::composed::{Deserializable, SignedPublicKey, SignedSecretKey};
use pgp::packet::{KeyFlags, Signature, SignatureType, SubpacketData};
use pgp::types::{KeyDetails, Password};
use tracing::{debug, trace};

use crate::core::key::{PrivateKey, PublicKey, SecretKey};
use crate::error::{Error, Result};

/// One transferable key: a primary key and its subkeys.
#[derive(Debug, Clone)]
pub struct KeyRing<K> {
    pub primary: K,
    pub subkeys: Vec<K>,
    pub user_ids: Vec<String>,
}

impl<K> KeyRing<K> {
    /// The primary key, then each subkey in packet order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        std::iter::once(&self.primary).chain(self.subkeys.iter())
    }
}

/// Key rings parsed from one byte stream, in stream order.
#[derive(Debug, Clone)]
pub struct KeyRingCollection<K> {
    rings: Vec<KeyRing<K>>,
}

pub type PublicKeyRingCollection = KeyRingCollection<PublicKey>;
pub type SecretKeyRingCollection = KeyRingCollection<SecretKey>;

impl KeyRingCollection<PublicKey> {
    /// Parse armored or binary public key-ring data.
    ///
    /// # Errors
    ///
    /// `ProtocolViolation` if the data is empty or is not a public key ring.
    pub fn parse_public(input: &[u8]) -> Result<Self> {
        let rings = parse_many::<SignedPublicKey>(input)?
            .into_iter()
            .map(public_ring)
            .collect::<Vec<_>>();
        trace!(rings = rings.len(), "parsed public key-ring collection");
        Ok(Self { rings })
    }
}

impl KeyRingCollection<SecretKey> {
    /// Parse armored or binary secret key-ring data.
    ///
    /// # Errors
    ///
    /// `ProtocolViolation` if the data is empty or is not a secret key ring.
    pub fn parse_secret(input: &[u8]) -> Result<Self> {
        let rings = parse_many::<SignedSecretKey>(input)?
            .into_iter()
            .map(secret_ring)
            .collect::<Vec<_>>();
        trace!(rings = rings.len(), "parsed secret key-ring collection");
        Ok(Self { rings })
    }
}

impl<K> KeyRingCollection<K> {
    pub fn rings(&self) -> &[KeyRing<K>] {
        &self.rings
    }

    /// Every key of every ring, in ring order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rings.iter().flat_map(|ring| ring.keys())
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

fn parse_many<T: Deserializable>(input: &[u8]) -> Result<Vec<T>> {
    let (rings, _headers) = T::from_reader_many(input)
        .map_err(|e| Error::protocol(format!("unreadable key ring: {}", e)))?;
    rings
        .collect::<pgp::errors::Result<Vec<T>>>()
        .map_err(|e| Error::protocol(format!("unreadable key ring: {}", e)))
}

fn public_ring(signed: SignedPublicKey) -> KeyRing<PublicKey> {
    let primary_flags = primary_key_flags(&signed.primary_key, &signed.details);
    let subkeys = signed
        .public_subkeys
        .into_iter()
        .map(|subkey| {
            let flags = binding_key_flags(&subkey.signatures);
            PublicKey::subkey(subkey.key, flags)
        })
        .collect();

    KeyRing {
        primary: PublicKey::primary(signed.primary_key, primary_flags),
        subkeys,
        user_ids: user_ids(&signed.details),
    }
}

fn secret_ring(signed: SignedSecretKey) -> KeyRing<SecretKey> {
    let primary_flags = primary_key_flags(signed.primary_key.public_key(), &signed.details);
    let subkeys = signed
        .secret_subkeys
        .into_iter()
        .map(|subkey| {
            let flags = binding_key_flags(&subkey.signatures);
            SecretKey::subkey(subkey.key, flags)
        })
        .collect();

    KeyRing {
        primary: SecretKey::primary(signed.primary_key, primary_flags),
        subkeys,
        user_ids: user_ids(&signed.details),
    }
}

fn user_ids(details: &pgp::composed::SignedKeyDetails) -> Vec<String> {
    details
        .users
        .iter()
        .map(|user| String::from_utf8_lossy(user.id.id()).into_owned())
        .collect()
}

/// Flags of the newest self-certification or direct-key signature the
/// primary issued over itself.
fn primary_key_flags(
    primary: &impl KeyDetails,
    details: &pgp::composed::SignedKeyDetails,
) -> Option<KeyFlags> {
    let key_id = primary.legacy_key_id();
    let fingerprint = primary.fingerprint();

    let self_signatures = details
        .users
        .iter()
        .flat_map(|user| user.signatures.iter())
        .chain(details.direct_signatures.iter())
        .filter(|sig| {
            sig.issuer_key_id().contains(&&key_id)
                || sig.issuer_fingerprint().contains(&&fingerprint)
        });
    newest_key_flags(self_signatures)
}

/// Flags of the newest subkey binding signature.
fn binding_key_flags(signatures: &[Signature]) -> Option<KeyFlags> {
    newest_key_flags(
        signatures
            .iter()
            .filter(|sig| sig.typ() == Some(SignatureType::SubkeyBinding)),
    )
}

/// On equal creation times the later signature wins.
fn newest_key_flags<'a>(signatures: impl Iterator<Item = &'a Signature>) -> Option<KeyFlags> {
    signatures
        .filter_map(|sig| {
            let flags = hashed_key_flags(sig)?;
            let created = sig.created().map_or(0, |at| at.as_secs());
            Some((created, flags))
        })
        .max_by_key(|(created, _)| *created)
        .map(|(_, flags)| flags)
}

/// The key flags subpacket of the hashed area, if present.
fn hashed_key_flags(sig: &Signature) -> Option<KeyFlags> {
    sig.config()?
        .hashed_subpackets()
        .find_map(|packet| match &packet.data {
            SubpacketData::KeyFlags(flags) => Some(flags.clone()),
            _ => None,
        })
}

/// Select the first encryption-capable public key of a key-ring stream.
///
/// # Errors
///
/// `KeyNotFound` if the stream does not parse or holds no usable
/// encryption key.
pub fn resolve_public_encryption_key(ring_bytes: &[u8]) -> Result<PublicKey> {
    let collection = PublicKeyRingCollection::parse_public(ring_bytes)
        .map_err(|e| Error::key_not_found(format!("unreadable public key ring: {}", e)))?;

    let key = collection
        .keys()
        .find(|key| key.can_encrypt())
        .cloned()
        .ok_or_else(|| Error::key_not_found("no encryption-capable public key in key ring"))?;

    debug!(key_id = %key.key_id(), subkey = key.is_subkey(), "selected encryption key");
    Ok(key)
}

/// Select the first encryption-capable secret key of a key-ring stream and
/// unlock it with the empty passphrase.
///
/// # Errors
///
/// `KeyNotFound` if the stream does not parse, holds no usable decryption
/// key, or the selected key does not unlock.
pub fn resolve_private_decryption_key(ring_bytes: &[u8]) -> Result<PrivateKey> {
    let collection = SecretKeyRingCollection::parse_secret(ring_bytes)
        .map_err(|e| Error::key_not_found(format!("unreadable secret key ring: {}", e)))?;

    let secret = collection
        .keys()
        .find(|key| key.public().can_encrypt())
        .ok_or_else(|| Error::key_not_found("no encryption-capable secret key in key ring"))?;

    debug!(
        key_id = %secret.key_id(),
        subkey = secret.public().is_subkey(),
        "selected decryption key"
    );
    secret.unlock(&Password::empty())
}
