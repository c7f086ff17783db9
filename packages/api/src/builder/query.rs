//! Reusable validated queries

use jql_core::error::JqlResult;
use jql_core::matcher::Matcher;
use jql_core::pattern::Pattern;
use jql_core::value::Value;

/// A pattern bound to a validated [`Matcher`]
///
/// Built by [`JqlBuilder::build`](super::JqlBuilder::build). A `Query` is
/// immutable and `Send + Sync`, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Query {
    pattern: Pattern,
    matcher: Matcher,
    debug_enabled: bool,
}

impl Query {
    pub(crate) fn new(pattern: Pattern, matcher: Matcher, debug_enabled: bool) -> Self {
        Self {
            pattern,
            matcher,
            debug_enabled,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Match `value`
    ///
    /// # Errors
    /// Returns the matching errors of [`Matcher::matches`].
    pub fn matches(&self, value: &Value) -> JqlResult<bool> {
        let result = self.matcher.matches(&self.pattern, value);
        if self.debug_enabled {
            log::debug!("JQL query against {value}: {result:?}");
        }
        result
    }

    /// Match a `serde_json` document
    ///
    /// # Errors
    /// Returns `JqlError::InvalidValueType` for numbers outside the value
    /// model, plus the errors of [`Query::matches`].
    pub fn matches_json(&self, json: &serde_json::Value) -> JqlResult<bool> {
        self.matches(&Value::try_from(json)?)
    }

    /// Count how many of `values` match, stopping at the first error
    ///
    /// # Errors
    /// Returns the first matching error encountered.
    pub fn count_matching<'v, I>(&self, values: I) -> JqlResult<usize>
    where
        I: IntoIterator<Item = &'v Value>,
    {
        let mut count = 0;
        for value in values {
            if self.matches(value)? {
                count += 1;
            }
        }
        Ok(count)
    }
}
