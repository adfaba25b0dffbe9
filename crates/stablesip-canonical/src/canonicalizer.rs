use crate::value::Value;

/// Tag byte for null (`N`).
pub const TAG_NULL: u8 = b'N';
/// Tag byte for booleans (`B`).
pub const TAG_BOOL: u8 = b'B';
/// Tag byte for integers (`I`).
pub const TAG_INT: u8 = b'I';
/// Tag byte for IEEE-754 doubles (`F`).
pub const TAG_FLOAT: u8 = b'F';
/// Tag byte for byte strings (`Y`).
pub const TAG_BYTES: u8 = b'Y';
/// Tag byte for Unicode strings (`S`).
pub const TAG_STRING: u8 = b'S';
/// Tag byte for ordered sequences (`L`).
pub const TAG_LIST: u8 = b'L';
/// Tag byte for fixed sequences (`T`).
pub const TAG_TUPLE: u8 = b'T';
/// Tag byte for unordered collections (`E`).
pub const TAG_SET: u8 = b'E';
/// Tag byte for mappings (`D`).
pub const TAG_MAP: u8 = b'D';
/// Tag byte for record objects (`O`).
pub const TAG_OBJECT: u8 = b'O';

/// Error returned when an input cannot be represented in the canonical model.
///
/// The [`Value`] enum is closed, so encoding a constructed value never fails;
/// this error surfaces at the open-world conversion boundary (the serde
/// bridge in [`crate::json`]).
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// The input type has no canonical representation and no field mapping.
    #[error("unsupported type for stable hashing: {0}")]
    UnsupportedType(String),
}

/// Sink that receives canonical bytes in order.
///
/// Implemented for `Vec<u8>` here and for the SipHash engine in
/// `stablesip-core`, so encodings can stream into a hasher without being
/// materialized.
pub trait CanonicalSink {
    /// Accepts the next chunk of canonical bytes.
    fn write_bytes(&mut self, chunk: &[u8]);
}

impl CanonicalSink for Vec<u8> {
    fn write_bytes(&mut self, chunk: &[u8]) {
        self.extend_from_slice(chunk);
    }
}

/// Recursively encodes `value` and feeds the canonical bytes to `sink`.
///
/// Unordered containers are sorted by the encoded byte sequences of their
/// items (lexicographic over bytes), never by the raw values, so
/// heterogeneous contents stay orderable. Recursion depth is bounded only by
/// the call stack; deeply nested inputs can overflow it.
pub fn feed_canonical<S: CanonicalSink>(value: &Value, sink: &mut S) {
    match value {
        Value::Null => sink.write_bytes(&[TAG_NULL]),
        Value::Bool(flag) => sink.write_bytes(&[TAG_BOOL, u8::from(*flag)]),
        Value::Int(int) => {
            let encoded = encode_int(*int);
            sink.write_bytes(&[TAG_INT]);
            write_len(sink, encoded.len());
            sink.write_bytes(&encoded);
        }
        Value::Float(float) => {
            sink.write_bytes(&[TAG_FLOAT]);
            sink.write_bytes(&float.to_le_bytes());
        }
        Value::Bytes(data) => {
            sink.write_bytes(&[TAG_BYTES]);
            write_len(sink, data.len());
            sink.write_bytes(data);
        }
        Value::String(text) => {
            sink.write_bytes(&[TAG_STRING]);
            write_len(sink, text.len());
            sink.write_bytes(text.as_bytes());
        }
        Value::List(items) => feed_sequence(TAG_LIST, items, sink),
        Value::Tuple(items) => feed_sequence(TAG_TUPLE, items, sink),
        Value::Set(items) => {
            sink.write_bytes(&[TAG_SET]);
            let mut encoded: Vec<Vec<u8>> = items
                .iter()
                .map(|item| {
                    let mut buf = Vec::new();
                    feed_canonical(item, &mut buf);
                    buf
                })
                .collect();
            encoded.sort();
            write_len(sink, encoded.len());
            for chunk in &encoded {
                write_len(sink, chunk.len());
                sink.write_bytes(chunk);
            }
        }
        Value::Map(pairs) => {
            sink.write_bytes(&[TAG_MAP]);
            let encoded = pairs
                .iter()
                .map(|(key, val)| {
                    let mut key_buf = Vec::new();
                    let mut val_buf = Vec::new();
                    feed_canonical(key, &mut key_buf);
                    feed_canonical(val, &mut val_buf);
                    (key_buf, val_buf)
                })
                .collect();
            feed_sorted_pairs(encoded, sink);
        }
        Value::Object { type_name, fields } => {
            sink.write_bytes(&[TAG_OBJECT]);
            write_len(sink, type_name.len());
            sink.write_bytes(type_name.as_bytes());
            // The field map is encoded under the mapping rule, tag included,
            // with field names as string values.
            sink.write_bytes(&[TAG_MAP]);
            let encoded = fields
                .iter()
                .map(|(name, val)| {
                    let mut key_buf = Vec::new();
                    let mut val_buf = Vec::new();
                    feed_canonical(&Value::String(name.clone()), &mut key_buf);
                    feed_canonical(val, &mut val_buf);
                    (key_buf, val_buf)
                })
                .collect();
            feed_sorted_pairs(encoded, sink);
        }
    }
}

/// Encodes `value` into a freshly allocated canonical byte buffer.
pub fn canonicalize_to_bytes(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    feed_canonical(value, &mut buf);
    buf
}

fn feed_sequence<S: CanonicalSink>(tag: u8, items: &[Value], sink: &mut S) {
    sink.write_bytes(&[tag]);
    write_len(sink, items.len());
    for item in items {
        feed_canonical(item, sink);
    }
}

fn feed_sorted_pairs<S: CanonicalSink>(mut pairs: Vec<(Vec<u8>, Vec<u8>)>, sink: &mut S) {
    pairs.sort_by(|left, right| left.0.cmp(&right.0));
    write_len(sink, pairs.len());
    for (key_bytes, val_bytes) in &pairs {
        write_len(sink, key_bytes.len());
        sink.write_bytes(key_bytes);
        write_len(sink, val_bytes.len());
        sink.write_bytes(val_bytes);
    }
}

fn write_len<S: CanonicalSink>(sink: &mut S, len: usize) {
    sink.write_bytes(&(len as u64).to_le_bytes());
}

/// Minimal signed big-endian two's-complement representation of `value`.
///
/// Zero is a single `0x00` byte. The byte count is the smallest that still
/// carries the sign bit, computed from the magnitude: one byte for -128..=127,
/// two for -32768..=32767, and so on.
fn encode_int(value: i128) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let magnitude_bits = if value < 0 {
        // -value - 1 equals !value in two's complement, without overflow at
        // i128::MIN.
        128 - (!value).leading_zeros()
    } else {
        128 - value.leading_zeros()
    };
    let len = (magnitude_bits as usize + 8) / 8;
    value.to_be_bytes()[16 - len..].to_vec()
}
