//! Streaming SipHash-2-4 engine and keyed stable hashing for stablesip.
//!
//! This crate provides:
//! - A bit-exact streaming SipHash-2-4 implementation matching the published
//!   reference vectors
//! - Algorithm selection by name and a fixed 64-bit digest result with byte,
//!   hex, and integer views
//! - `stable_keyed_hash`, which streams the canonical encoding of a value
//!   straight into the keyed engine
//!
//! Core invariants:
//! - Same value + same key always produce the same digest, across chunkings
//!   and across implementations that follow the canonical encoding
//! - Every hash call owns its engine state; nothing is shared or cached
//! - Digest reads never consume the streaming state
//!
#![deny(missing_docs)]

/// Digest result and algorithm selection.
pub mod digest;
/// Error types for keyed stable hashing.
pub mod errors;
/// Orchestration: canonical encoding streamed into a keyed engine.
pub mod hash;
/// Streaming SipHash-2-4 engine.
pub mod siphash;

pub use digest::{Algorithm, DigestResult};
pub use errors::StableHashError;
pub use hash::{
    hash_with_algorithm, stable_keyed_hash, stable_keyed_hash_serialize, stable_keyed_hash_with,
};
pub use siphash::SipHash24;
