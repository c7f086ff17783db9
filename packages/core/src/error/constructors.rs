//! Error constructor functions
//!
//! Factory methods for creating JQL errors with consistent messages.

use super::types::JqlError;

impl JqlError {
    /// Creates an invalid pattern error
    ///
    /// # Examples
    /// ```
    /// use jql_core::error::JqlError;
    ///
    /// let error = JqlError::invalid_pattern("object pattern has 2 wildcard keys");
    /// assert!(error.to_string().contains("2 wildcard keys"));
    /// ```
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        JqlError::InvalidPatternType(msg.into())
    }

    /// Creates an invalid value error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        JqlError::InvalidValueType(msg.into())
    }

    /// Creates a regex compilation error
    ///
    /// # Arguments
    /// * `pattern` - Source text of the regular expression
    /// * `reason` - Compiler diagnostic
    pub fn invalid_regex(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        JqlError::InvalidRegex {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        JqlError::InvalidParameter(msg.into())
    }

    /// Creates an internal invariant violation
    ///
    /// # Arguments
    /// * `pattern_kind` - Tag of the pattern node being dispatched
    /// * `value_kind` - Tag of the value node being dispatched
    pub fn invariant_violation(pattern_kind: &str, value_kind: &str) -> Self {
        JqlError::InternalInvariantViolation(format!(
            "{pattern_kind} pattern against {value_kind} value fell through every dispatch rule"
        ))
    }
}
