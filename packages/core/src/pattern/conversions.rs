//! Conversions into [`Pattern`] and [`PatternKey`]

use serde_json::Value as JsonValue;

use super::{Pattern, PatternKey};
use crate::error::{JqlError, JqlResult};
use crate::value::{Key, Value};

impl Pattern {
    /// Concrete pattern that matches `value` and structurally equal values
    ///
    /// Arrays become exact array patterns and objects become subtree
    /// patterns naming every key of `value`.
    #[must_use]
    pub fn literal(value: &Value) -> Pattern {
        match value {
            Value::Null => Pattern::Null,
            Value::Bool(b) => Pattern::Bool(*b),
            Value::Int(i) => Pattern::Int(*i),
            Value::Float(f) => Pattern::Float(*f),
            Value::String(s) => Pattern::String(s.clone()),
            Value::Array(items) => Pattern::Array(items.iter().map(Pattern::literal).collect()),
            Value::Object(map) => Pattern::Object(
                map.iter()
                    .map(|(key, item)| (PatternKey::Key(key.clone()), Pattern::literal(item)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Pattern {
    fn from(value: &Value) -> Self {
        Pattern::literal(value)
    }
}

impl TryFrom<&JsonValue> for Pattern {
    type Error = JqlError;

    fn try_from(json: &JsonValue) -> JqlResult<Self> {
        Value::try_from(json).map(|value| Pattern::literal(&value))
    }
}

impl TryFrom<JsonValue> for Pattern {
    type Error = JqlError;

    fn try_from(json: JsonValue) -> JqlResult<Self> {
        Pattern::try_from(&json)
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Bool(b)
    }
}

impl From<i64> for Pattern {
    fn from(i: i64) -> Self {
        Pattern::Int(i)
    }
}

impl From<i32> for Pattern {
    fn from(i: i32) -> Self {
        Pattern::Int(i64::from(i))
    }
}

impl From<f64> for Pattern {
    fn from(f: f64) -> Self {
        Pattern::Float(f)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::String(s.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::String(s)
    }
}

impl From<Key> for PatternKey {
    fn from(key: Key) -> Self {
        PatternKey::Key(key)
    }
}

impl From<i64> for PatternKey {
    fn from(i: i64) -> Self {
        PatternKey::Key(Key::Int(i))
    }
}

impl From<i32> for PatternKey {
    fn from(i: i32) -> Self {
        PatternKey::Key(Key::from(i))
    }
}

impl From<bool> for PatternKey {
    fn from(b: bool) -> Self {
        PatternKey::Key(Key::Bool(b))
    }
}

impl From<&str> for PatternKey {
    fn from(s: &str) -> Self {
        PatternKey::Key(Key::from(s))
    }
}

impl From<String> for PatternKey {
    fn from(s: String) -> Self {
        PatternKey::Key(Key::String(s))
    }
}
