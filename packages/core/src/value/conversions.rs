//! Conversions into [`Value`]
//!
//! Scalars convert infallibly. `serde_json` documents convert fallibly:
//! integers beyond `i64` have no `Value` representation.

use serde_json::Value as JsonValue;

use super::{Key, ObjectMap, Value};
use crate::error::{JqlError, JqlResult};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<ObjectMap> for Value {
    fn from(map: ObjectMap) -> Self {
        Value::Object(map)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Null => Value::Null,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(i) => Value::Int(i),
            Key::Float(f) => Value::Float(f),
            Key::String(s) => Value::String(s),
        }
    }
}

fn convert_number(number: &serde_json::Number) -> JqlResult<Value> {
    if let Some(i) = number.as_i64() {
        return Ok(Value::Int(i));
    }
    if number.is_u64() {
        return Err(JqlError::invalid_value(format!(
            "integer {number} does not fit in a signed 64-bit value"
        )));
    }
    number
        .as_f64()
        .map(Value::Float)
        .ok_or_else(|| JqlError::invalid_value(format!("unrepresentable number {number}")))
}

impl TryFrom<&JsonValue> for Value {
    type Error = JqlError;

    fn try_from(json: &JsonValue) -> JqlResult<Self> {
        Ok(match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => convert_number(n)?,
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<JqlResult<Vec<_>>>()?,
            ),
            JsonValue::Object(members) => {
                let mut map = ObjectMap::with_capacity(members.len());
                for (name, member) in members {
                    map.insert(Key::String(name.clone()), Value::try_from(member)?);
                }
                Value::Object(map)
            }
        })
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = JqlError;

    fn try_from(json: JsonValue) -> JqlResult<Self> {
        Value::try_from(&json)
    }
}
