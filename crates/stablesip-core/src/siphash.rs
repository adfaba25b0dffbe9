use stablesip_canonical::CanonicalSink;

use crate::errors::StableHashError;

/// Required key length in bytes.
pub const KEY_LEN: usize = 16;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 8;

const INIT_V0: u64 = 0x736f6d6570736575;
const INIT_V1: u64 = 0x646f72616e646f6d;
const INIT_V2: u64 = 0x6c7967656e657261;
const INIT_V3: u64 = 0x7465646279746573;

/// Streaming SipHash-2-4 state.
///
/// `Clone` produces a fully independent state: updating the clone never
/// affects the original's words or tail buffer. Digest reads operate on an
/// internal clone, so the live state stays updatable afterwards.
#[derive(Debug, Clone)]
pub struct SipHash24 {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
    tail: [u8; 8],
    tail_len: usize,
    total_len: u64,
}

impl SipHash24 {
    /// Creates a keyed hasher. The key must be exactly 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, StableHashError> {
        if key.len() != KEY_LEN {
            return Err(StableHashError::InvalidKey(key.len()));
        }
        let mut half = [0u8; 8];
        half.copy_from_slice(&key[0..8]);
        let k0 = u64::from_le_bytes(half);
        half.copy_from_slice(&key[8..16]);
        let k1 = u64::from_le_bytes(half);
        Ok(Self {
            v0: INIT_V0 ^ k0,
            v1: INIT_V1 ^ k1,
            v2: INIT_V2 ^ k0,
            v3: INIT_V3 ^ k1,
            tail: [0u8; 8],
            tail_len: 0,
            total_len: 0,
        })
    }

    /// Absorbs input bytes. Any chunking, including empty slices, yields the
    /// same digest as a single concatenated update.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let mut input = data;

        if self.tail_len > 0 {
            let take = (8 - self.tail_len).min(input.len());
            self.tail[self.tail_len..self.tail_len + take].copy_from_slice(&input[..take]);
            self.tail_len += take;
            input = &input[take..];
            if self.tail_len < 8 {
                return;
            }
            let block = u64::from_le_bytes(self.tail);
            self.compress(block);
            self.tail_len = 0;
        }

        let mut chunks = input.chunks_exact(8);
        for chunk in &mut chunks {
            let mut block = [0u8; 8];
            block.copy_from_slice(chunk);
            self.compress(u64::from_le_bytes(block));
        }
        let rest = chunks.remainder();
        self.tail[..rest.len()].copy_from_slice(rest);
        self.tail_len = rest.len();
    }

    /// Returns the 8-byte digest without consuming the streaming state.
    pub fn digest(&self) -> [u8; DIGEST_LEN] {
        self.clone().finalize().to_le_bytes()
    }

    /// Lowercase hex rendering of [`SipHash24::digest`].
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Unsigned little-endian integer view of [`SipHash24::digest`].
    pub fn intdigest(&self) -> u64 {
        self.clone().finalize()
    }

    fn compress(&mut self, block: u64) {
        self.v3 ^= block;
        self.round();
        self.round();
        self.v0 ^= block;
    }

    fn round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);
    }

    fn finalize(mut self) -> u64 {
        // Final block: buffered tail bytes in position, total length mod 256
        // in the most significant byte.
        let mut block = [0u8; 8];
        block[..self.tail_len].copy_from_slice(&self.tail[..self.tail_len]);
        block[7] = (self.total_len & 0xff) as u8;
        self.compress(u64::from_le_bytes(block));

        self.v2 ^= 0xff;
        for _ in 0..4 {
            self.round();
        }
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

impl CanonicalSink for SipHash24 {
    fn write_bytes(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_key() -> Vec<u8> {
        (0u8..16).collect()
    }

    #[test]
    fn empty_input_matches_reference_vector() {
        let hasher = SipHash24::new(&reference_key()).unwrap();
        assert_eq!(hasher.hexdigest(), "310e0edd47db6f72");
    }

    #[test]
    fn full_block_matches_reference_vector() {
        let mut hasher = SipHash24::new(&reference_key()).unwrap();
        hasher.update(&(0u8..8).collect::<Vec<_>>());
        assert_eq!(hasher.hexdigest(), "6224939a79f5f593");
    }

    #[test]
    fn longest_reference_vector_matches() {
        let mut hasher = SipHash24::new(&reference_key()).unwrap();
        hasher.update(&(0u8..63).collect::<Vec<_>>());
        assert_eq!(hasher.hexdigest(), "724506eb4c328a95");
    }

    #[test]
    fn digest_does_not_consume_state() {
        let mut hasher = SipHash24::new(&[0u8; 16]).unwrap();
        hasher.update(b"abc");
        let before = hasher.digest();
        assert_eq!(hasher.digest(), before);
        hasher.update(b"def");
        assert_ne!(hasher.digest(), before);
    }

    #[test]
    fn rejects_short_and_long_keys() {
        assert!(matches!(
            SipHash24::new(b"short"),
            Err(StableHashError::InvalidKey(5))
        ));
        assert!(SipHash24::new(&[0u8; 17]).is_err());
    }

    #[test]
    fn intdigest_is_little_endian_view_of_digest() {
        let mut hasher = SipHash24::new(&[0u8; 16]).unwrap();
        hasher.update(b"test");
        assert_eq!(hasher.intdigest(), u64::from_le_bytes(hasher.digest()));
    }
}
