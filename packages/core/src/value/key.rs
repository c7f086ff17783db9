//! Scalar object keys
//!
//! Object keys are not restricted to strings. Float keys compare by bit
//! pattern after folding `-0.0` onto `0.0` and every NaN onto one canonical
//! NaN, so `Key` can implement `Eq` and `Hash`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Scalar key of an object value or object pattern
#[derive(Debug, Clone)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Key {
    /// Integer view of this key, used by list selectors
    ///
    /// Only `Int` keys qualify; booleans are not integers here.
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Type tag used in diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Float(_) => "float",
            Key::String(_) => "string",
        }
    }
}

#[inline]
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0.0f64.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Null, Key::Null) => true,
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Key::String(a), Key::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Null => {}
            Key::Bool(b) => b.hash(state),
            Key::Int(i) => i.hash(state),
            Key::Float(f) => canonical_bits(*f).hash(state),
            Key::String(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Float(x) => write!(f, "{x}"),
            Key::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        Key::Float(f)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}
