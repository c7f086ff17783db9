//! Pattern model
//!
//! A [`Pattern`] describes the shape a [`Value`](crate::value::Value) must
//! have. `Wildcard` means "any value" in value position, "any key not named
//! explicitly" in object-key position and "zero or more elements" inside an
//! array pattern.

mod conversions;
mod regex_pattern;

pub use regex_pattern::{REGEX_CACHE, RegexCache, RegexPattern};

use crate::error::JqlResult;
use crate::value::Key;

/// Key of an object pattern
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKey {
    /// Names one key of the value object, or one index of a value array
    Key(Key),
    /// Stands for any key not named by a sibling `Key`
    Wildcard,
}

/// Query pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Wildcard,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Regex(RegexPattern),
    /// Ordered alternatives; the first one that matches wins
    Alternatives(Vec<Pattern>),
    Object(Vec<(PatternKey, Pattern)>),
    Array(Vec<Pattern>),
}

impl Pattern {
    /// Compile a full-match regular expression pattern
    ///
    /// # Errors
    /// Returns `JqlError::InvalidRegex` if `source` does not compile.
    pub fn regex(source: impl Into<String>) -> JqlResult<Pattern> {
        RegexPattern::new(source).map(Pattern::Regex)
    }

    /// Alternation over `alternatives`, tried in order
    pub fn any_of<I>(alternatives: I) -> Pattern
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        Pattern::Alternatives(alternatives.into_iter().map(Into::into).collect())
    }

    /// Array pattern; `Pattern::Wildcard` elements absorb zero or more items
    pub fn array<I>(items: I) -> Pattern
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        Pattern::Array(items.into_iter().map(Into::into).collect())
    }

    /// Object pattern from keyed entries
    ///
    /// Entries are validated when matched, not here.
    pub fn object<K, I>(entries: I) -> Pattern
    where
        K: Into<PatternKey>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        Pattern::Object(
            entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }

    /// Type tag used in diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Wildcard => "wildcard",
            Pattern::Null => "null",
            Pattern::Bool(_) => "bool",
            Pattern::Int(_) => "int",
            Pattern::Float(_) => "float",
            Pattern::String(_) => "string",
            Pattern::Regex(_) => "regex",
            Pattern::Alternatives(_) => "alternatives",
            Pattern::Object(_) => "object",
            Pattern::Array(_) => "array",
        }
    }
}
