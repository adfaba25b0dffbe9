use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::canonicalizer::EncodeError;
use crate::value::Value;

impl Value {
    /// Converts a parsed JSON value into the canonical model.
    ///
    /// JSON objects become mappings with string keys; insertion order is
    /// irrelevant because mapping encoding sorts by encoded key bytes.
    /// Numbers that fit `i64`/`u64` become integers, everything else a float.
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(*flag),
            JsonValue::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Value::Int(int as i128)
                } else if let Some(int) = number.as_u64() {
                    Value::Int(int as i128)
                } else {
                    Value::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(text) => Value::String(text.clone()),
            JsonValue::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, val)| (Value::String(key.clone()), Value::from_json(val)))
                    .collect(),
            ),
        }
    }
}

/// Converts any serializable value into the canonical model via serde_json.
///
/// This is the open-world entry point: types whose serialization fails (for
/// example maps with non-string keys, or `Serialize` impls that error) are
/// rejected with [`EncodeError::UnsupportedType`] naming the source type.
pub fn value_from_serialize<T: Serialize>(value: &T) -> Result<Value, EncodeError> {
    let json = serde_json::to_value(value).map_err(|err| {
        EncodeError::UnsupportedType(format!("{}: {}", std::any::type_name::<T>(), err))
    })?;
    Ok(Value::from_json(&json))
}
