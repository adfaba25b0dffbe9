use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::StableHashError;
use crate::siphash::DIGEST_LEN;

/// Supported keyed hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// SipHash-2-4 (the stablesip default).
    #[default]
    #[serde(rename = "siphash24")]
    SipHash24,
}

impl Algorithm {
    /// Parses an algorithm name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, StableHashError> {
        match name.to_ascii_lowercase().as_str() {
            "siphash24" => Ok(Algorithm::SipHash24),
            _ => Err(StableHashError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

/// Immutable 64-bit digest with byte, hex, and integer views.
///
/// Equality is by raw digest bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestResult {
    bytes: [u8; DIGEST_LEN],
}

impl DigestResult {
    /// Wraps raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Lowercase hex rendering (16 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Unsigned little-endian integer view.
    pub fn as_u64(&self) -> u64 {
        u64::from_le_bytes(self.bytes)
    }
}

impl fmt::Display for DigestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
