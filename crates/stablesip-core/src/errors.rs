use thiserror::Error;

/// Errors surfaced by keyed stable hashing.
#[derive(Error, Debug)]
pub enum StableHashError {
    /// Requested algorithm name is not supported.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Key has the wrong length; SipHash-2-4 requires exactly 16 bytes.
    #[error("invalid key: expected 16 bytes, got {0}")]
    InvalidKey(usize),
    /// Input could not be converted into the canonical value model.
    #[error("encoding failed: {0}")]
    Encode(#[from] stablesip_canonical::EncodeError),
}
