//! Error types for pgpdrop.
//!
//! Every operation fails with one of three kinds: a key that could not be
//! found (or unlocked), a message that violates the expected packet
//! structure, or an I/O failure while reading or writing a stream.
//! Configuration loading has its own nested error.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// No key in the ring satisfies the required capability, or the
    /// secret key could not be unlocked.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Malformed or unexpected packet sequence.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// Stream read/write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Creates a `KeyNotFound` error.
    pub fn key_not_found<T: ToString>(msg: T) -> Self {
        Self::KeyNotFound(msg.to_string())
    }

    /// Creates a `ProtocolViolation` error.
    pub fn protocol<T: ToString>(msg: T) -> Self {
        Self::ProtocolViolation(msg.to_string())
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
