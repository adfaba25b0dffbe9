use serde::Serialize;
use stablesip_canonical::{feed_canonical, value_from_serialize, Value};

use crate::digest::{Algorithm, DigestResult};
use crate::errors::StableHashError;
use crate::siphash::SipHash24;

/// Hashes a canonical value with the default algorithm (SipHash-2-4).
///
/// The canonical encoding is streamed into the keyed engine chunk by chunk;
/// the full encoding is never materialized for scalars and ordered
/// containers.
pub fn stable_keyed_hash(value: &Value, key: &[u8]) -> Result<DigestResult, StableHashError> {
    hash_with_algorithm(value, key, Algorithm::SipHash24)
}

/// Hashes a canonical value, dispatching on an algorithm name.
///
/// Names are matched case-insensitively; unknown names fail with
/// [`StableHashError::UnsupportedAlgorithm`] before any work is done.
pub fn stable_keyed_hash_with(
    value: &Value,
    key: &[u8],
    algorithm: &str,
) -> Result<DigestResult, StableHashError> {
    hash_with_algorithm(value, key, Algorithm::parse(algorithm)?)
}

/// Hashes any serializable value by converting it through the serde bridge.
///
/// Types with no canonical representation fail with an encoding error; no
/// partial digest is produced.
pub fn stable_keyed_hash_serialize<T: Serialize>(
    value: &T,
    key: &[u8],
) -> Result<DigestResult, StableHashError> {
    let value = value_from_serialize(value)?;
    stable_keyed_hash(&value, key)
}

/// Hashes a canonical value with an explicitly selected algorithm.
pub fn hash_with_algorithm(
    value: &Value,
    key: &[u8],
    algorithm: Algorithm,
) -> Result<DigestResult, StableHashError> {
    match algorithm {
        Algorithm::SipHash24 => {
            let mut hasher = SipHash24::new(key)?;
            feed_canonical(value, &mut hasher);
            Ok(DigestResult::from_bytes(hasher.digest()))
        }
    }
}
