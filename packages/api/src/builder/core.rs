//! Core `JqlBuilder` structure and base functionality
//!
//! Holds the pattern and options of a match and runs it against values.

use jql_core::config::MatchOptions;
use jql_core::error::{JqlError, JqlResult};
use jql_core::matcher::Matcher;
use jql_core::pattern::Pattern;
use jql_core::value::Value;

use super::query::Query;

/// Fluent builder for a pattern match
///
/// Options are validated when the builder is used, so an invalid tolerance
/// surfaces as `JqlError::InvalidToleranceValue` from [`JqlBuilder::build`] or
/// any `matches*` method.
#[derive(Debug, Clone)]
pub struct JqlBuilder {
    /// Pattern to match with
    pub(crate) pattern: Pattern,
    /// Options applied to every match
    pub(crate) options: MatchOptions,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl JqlBuilder {
    /// Start building a match for `pattern` with default options
    #[must_use]
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            options: MatchOptions::default(),
            debug_enabled: false,
        }
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Load options from a JSON document such as `{"relative_tolerance": 1e-9}`
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `JqlError::InvalidParameter` if the document does not describe
    /// match options.
    pub fn options_json(self, json: &str) -> JqlResult<Self> {
        let options: MatchOptions = serde_json::from_str(json)
            .map_err(|e| JqlError::invalid_parameter(format!("match options: {e}")))?;
        Ok(self.options(options))
    }

    /// Relative tolerance for float comparisons, in `[0, 1)`
    #[must_use]
    pub fn relative_tolerance(mut self, tolerance: f64) -> Self {
        self.options.relative_tolerance = tolerance;
        self
    }

    /// Maximum nesting depth descended before matching gives up
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Log every match decision at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Validate the options and freeze the builder into a reusable [`Query`]
    ///
    /// # Errors
    /// Returns the option validation errors of [`Matcher::new`].
    pub fn build(self) -> JqlResult<Query> {
        let matcher = Matcher::new(self.options)?;
        Ok(Query::new(self.pattern, matcher, self.debug_enabled))
    }

    /// Match `value` once
    ///
    /// # Errors
    /// Returns option validation errors and the matching errors of
    /// [`Matcher::matches`].
    pub fn matches(&self, value: &Value) -> JqlResult<bool> {
        let matcher = Matcher::new(self.options)?;
        let result = matcher.matches(&self.pattern, value);
        if self.debug_enabled {
            log::debug!("JQL match of {} against {value}: {result:?}", self.pattern.kind());
        }
        result
    }

    /// Match a `serde_json` document once
    ///
    /// # Errors
    /// Returns `JqlError::InvalidValueType` if the document holds a number
    /// outside the value model, plus the errors of [`JqlBuilder::matches`].
    pub fn matches_json(&self, json: &serde_json::Value) -> JqlResult<bool> {
        let value = Value::try_from(json)?;
        self.matches(&value)
    }

    /// Match `value`, turning any error into a decision with `handler`
    ///
    /// Fatal errors (`InternalInvariantViolation`) are logged at error level
    /// before being handed to `handler`.
    pub fn matches_or_else<F>(&self, value: &Value, handler: F) -> bool
    where
        F: FnOnce(JqlError) -> bool,
    {
        match self.matches(value) {
            Ok(matched) => matched,
            Err(error) => {
                if error.is_fatal() {
                    log::error!("JQL matcher defect: {error}");
                } else {
                    log::debug!("JQL match failed: {error}");
                }
                handler(error)
            }
        }
    }
}
