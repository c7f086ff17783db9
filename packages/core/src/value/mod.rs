//! Hierarchical value model
//!
//! [`Value`] is the JSON-like tree a pattern is matched against. Values are
//! built by the caller and only read during matching.

use std::fmt;

mod conversions;
mod key;

pub use key::Key;

use crate::error::{JqlError, JqlResult};

/// Object payload of a [`Value`]
pub type ObjectMap = hashbrown::HashMap<Key, Value>;

/// Target value of a match
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(ObjectMap),
}

impl Value {
    /// Build an object value from key/value pairs
    ///
    /// # Errors
    /// Returns `JqlError::InvalidValueType` if a key appears twice.
    pub fn object<K, I>(entries: I) -> JqlResult<Value>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let entries = entries.into_iter();
        let mut map = ObjectMap::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(JqlError::invalid_value(format!(
                    "object value repeats key {key}"
                )));
            }
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }

    /// Build an array value
    pub fn array<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Type tag used in diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
