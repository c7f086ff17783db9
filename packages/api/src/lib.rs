//! JQL Public API
//!
//! Structural pattern matching for JSON-like documents. Build a
//! [`Pattern`], point it at a [`Value`] and get a yes or no.
//!
//! ```rust
//! use jql::{Jql, Pattern, PatternKey, Value};
//!
//! let pattern = Pattern::object([
//!     (PatternKey::from("name"), Pattern::regex("j.*").unwrap_or(Pattern::Wildcard)),
//!     (PatternKey::Wildcard, Pattern::from(true)),
//! ]);
//! let value = Value::try_from(serde_json::json!({"name": "jql", "stable": true}))
//!     .unwrap_or(Value::Null);
//!
//! assert!(Jql::pattern(pattern).matches(&value).unwrap_or(false));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{JqlBuilder, Query};

// Re-export the data model and engine from the core package
pub use jql_core::prelude::*;
pub use jql_core::{config, error, matcher, pattern, value};

/// Main JQL entry point providing static builder methods
pub struct Jql;

impl Jql {
    /// Start building a match for `pattern`
    #[must_use]
    pub fn pattern(pattern: Pattern) -> JqlBuilder {
        JqlBuilder::new(pattern)
    }

    /// Start building a match for the literal shape of `value`
    #[must_use]
    pub fn literal(value: &Value) -> JqlBuilder {
        JqlBuilder::new(Pattern::literal(value))
    }

    /// Start building a match for a full-match regular expression
    ///
    /// # Errors
    /// Returns `JqlError::InvalidRegex` if `source` does not compile.
    pub fn regex(source: &str) -> JqlResult<JqlBuilder> {
        Pattern::regex(source).map(JqlBuilder::new)
    }
}

/// Match `value` against `pattern` with default options
///
/// # Errors
/// See [`Matcher::matches`].
pub fn matches(pattern: &Pattern, value: &Value) -> JqlResult<bool> {
    jql_core::matches(pattern, value, &MatchOptions::default())
}

/// Match `value` against `pattern` with explicit options
///
/// # Errors
/// Returns option validation errors and the errors of [`Matcher::matches`].
pub fn matches_with(pattern: &Pattern, value: &Value, options: &MatchOptions) -> JqlResult<bool> {
    jql_core::matches(pattern, value, options)
}

/// Match two `serde_json` documents, the first read as a literal pattern
///
/// # Errors
/// Returns `JqlError::InvalidValueType` for numbers outside the value model.
pub fn matches_json(pattern: &serde_json::Value, value: &serde_json::Value) -> JqlResult<bool> {
    let pattern = Pattern::try_from(pattern)?;
    let value = Value::try_from(value)?;
    matches(&pattern, &value)
}
