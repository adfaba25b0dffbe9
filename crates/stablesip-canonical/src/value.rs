/// Canonical value: the closed set of kinds that participate in stable hashing.
///
/// Every variant maps to exactly one tag byte in the canonical encoding (see
/// [`crate::canonicalizer`]). Container variants hold further `Value`s, so
/// arbitrarily nested structures are representable; cycles are not (and are
/// unsupported for hashing).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (tag `N`).
    Null,
    /// Boolean (tag `B`).
    Bool(bool),
    /// Signed integer, scoped to the `i128` range (tag `I`).
    Int(i128),
    /// IEEE-754 double; the bit pattern is encoded as-is, including NaN
    /// payloads and signed zero (tag `F`).
    Float(f64),
    /// Raw byte string (tag `Y`).
    Bytes(Vec<u8>),
    /// Unicode string, encoded as UTF-8 (tag `S`).
    String(String),
    /// Ordered sequence with list semantics; element order is significant
    /// (tag `L`).
    List(Vec<Value>),
    /// Fixed sequence with tuple semantics; element order is significant and
    /// the encoding differs from [`Value::List`] by tag alone (tag `T`).
    Tuple(Vec<Value>),
    /// Unordered collection with multiset semantics; element order is
    /// insignificant for hashing (tag `E`).
    Set(Vec<Value>),
    /// Key/value mapping; pair order is insignificant for hashing (tag `D`).
    Map(Vec<(Value, Value)>),
    /// User-defined record: a fully-qualified type name plus named fields
    /// (tag `O`).
    Object {
        /// Fully-qualified type name, segments joined by `.`.
        type_name: String,
        /// Field name to value pairs, in declaration order.
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Builds a fixed sequence (tuple semantics).
    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(items)
    }

    /// Builds an unordered collection. The given order does not affect the
    /// canonical encoding.
    pub fn set(items: Vec<Value>) -> Value {
        Value::Set(items)
    }

    /// Builds a mapping from key/value pairs. Pair order does not affect the
    /// canonical encoding.
    pub fn map(pairs: Vec<(Value, Value)>) -> Value {
        Value::Map(pairs)
    }

    /// Builds a record value from a type name and named fields.
    pub fn object(type_name: impl Into<String>, fields: Vec<(String, Value)>) -> Value {
        Value::Object {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Converts a [`Record`] implementor into its canonical object value.
    pub fn from_record<R: Record>(record: &R) -> Value {
        Value::Object {
            type_name: record.type_name().to_string(),
            fields: record
                .record_fields()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

/// Capability for user-defined record types that participate in hashing.
///
/// Implementors expose a fully-qualified type name and their fields in
/// declaration order; canonical encoding still sorts fields by encoded name
/// bytes, so declaration order never leaks into the digest.
pub trait Record {
    /// Fully-qualified type name (module path and type name joined by `.`).
    fn type_name(&self) -> &str;

    /// Field name/value pairs in declaration order.
    fn record_fields(&self) -> Vec<(&'static str, Value)>;
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i128)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
