//! Core library components.
//!
//! This module contains key-ring handling, the encryption pipelines and
//! configuration. Packet codecs and armor come from the `pgp` crate.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod key;
pub mod keyring;
pub mod literal;
