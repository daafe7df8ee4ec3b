//! Pipeline configuration.
//!
//! Settings are plain TOML, every field optional:
//!
//! ```toml
//! cipher = "aes256"            # aes128 | aes192 | aes256 | cast5
//! compression = "zlib"         # zip | zlib
//! integrity_protection = true  # false emits legacy SED packets
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::types::CompressionAlgorithm;

use crate::error::{ConfigError, Result};

/// Session key cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetricAlgorithm {
    Cast5,
    Aes128,
    Aes192,
    Aes256,
}

impl From<SymmetricAlgorithm> for SymmetricKeyAlgorithm {
    fn from(algorithm: SymmetricAlgorithm) -> Self {
        match algorithm {
            SymmetricAlgorithm::Cast5 => Self::CAST5,
            SymmetricAlgorithm::Aes128 => Self::AES128,
            SymmetricAlgorithm::Aes192 => Self::AES192,
            SymmetricAlgorithm::Aes256 => Self::AES256,
        }
    }
}

/// Compression applied around the literal packet.
///
/// BZip2 is read by neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Zip,
    Zlib,
}

impl From<Compression> for CompressionAlgorithm {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::Zip => Self::ZIP,
            Compression::Zlib => Self::ZLIB,
        }
    }
}

/// How messages are encrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Session key cipher.
    pub cipher: SymmetricAlgorithm,
    /// Compression applied around the literal packet.
    pub compression: Compression,
    /// Emit SEIPD with a modification detection code.
    pub integrity_protection: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cipher: SymmetricAlgorithm::Aes256,
            compression: Compression::Zlib,
            integrity_protection: true,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, unknown keys or
    /// unknown algorithm names.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        debug!(
            cipher = ?settings.cipher,
            compression = ?settings.compression,
            integrity_protection = settings.integrity_protection,
            "settings parsed"
        );
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or
    /// `ConfigError::Parse` if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Write settings to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving settings");
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
