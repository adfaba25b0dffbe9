//! Canonical value model and deterministic byte encoding for stablesip.
//!
//! This crate defines the closed set of value kinds that participate in keyed
//! stable hashing and the tagged, length-prefixed byte encoding that makes two
//! semantically equal values byte-identical regardless of how they were built.
//! Unordered containers (sets, maps) are sorted by their already-encoded byte
//! sequences, so heterogeneous or otherwise unorderable contents still encode
//! deterministically.
//!
#![deny(missing_docs)]

/// Canonical byte encoding: tag bytes, length prefixes, encoded-bytes sorting.
pub mod canonicalizer;
/// Bridge between serde/serde_json values and the canonical value model.
pub mod json;
/// Canonical value model and the record capability for user-defined types.
pub mod value;

pub use canonicalizer::{canonicalize_to_bytes, feed_canonical, CanonicalSink, EncodeError};
pub use json::value_from_serialize;
pub use value::{Record, Value};
