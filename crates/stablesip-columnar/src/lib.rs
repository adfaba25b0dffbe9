//! Vectorized keyed hashing over columns of canonical values.
//!
//! Each adapter iterates a column in order, hashes every element with the
//! selected keyed algorithm, and collects the unsigned 64-bit digests into a
//! library-native vector. External columnar libraries are build-time optional:
//! enable the `arrow` or `ndarray` feature to get the corresponding adapter;
//! without a feature only the plain `Vec<u64>` form is available.
//!
#![deny(missing_docs)]

use stablesip_canonical::Value;
use stablesip_core::{hash_with_algorithm, Algorithm, StableHashError};

/// Hashes each value of a column in order, one u64 digest per element.
///
/// The first error aborts the whole column; no partial output is returned.
pub fn hash_column<'a, I>(
    values: I,
    key: &[u8],
    algorithm: Algorithm,
) -> Result<Vec<u64>, StableHashError>
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .map(|value| hash_with_algorithm(value, key, algorithm).map(|digest| digest.as_u64()))
        .collect()
}

/// Hashes a column into an Arrow `UInt64Array`, preserving element order.
#[cfg(feature = "arrow")]
pub fn hash_arrow_column<'a, I>(
    values: I,
    key: &[u8],
    algorithm: Algorithm,
) -> Result<arrow_array::UInt64Array, StableHashError>
where
    I: IntoIterator<Item = &'a Value>,
{
    Ok(arrow_array::UInt64Array::from(hash_column(
        values, key, algorithm,
    )?))
}

/// Hashes a column into an `ndarray::Array1<u64>`, preserving element order.
#[cfg(feature = "ndarray")]
pub fn hash_ndarray_column<'a, I>(
    values: I,
    key: &[u8],
    algorithm: Algorithm,
) -> Result<ndarray::Array1<u64>, StableHashError>
where
    I: IntoIterator<Item = &'a Value>,
{
    Ok(ndarray::Array1::from_vec(hash_column(
        values, key, algorithm,
    )?))
}
