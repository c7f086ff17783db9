//! JQL Error Types
//!
//! Core error types for pattern validation, configuration and matching.

/// Result type for JQL operations
pub type JqlResult<T> = Result<T, JqlError>;

/// Classification of [`JqlError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Pattern node outside the pattern type domain
    InvalidPatternType,
    /// Value node outside the value type domain
    InvalidValueType,
    /// Relative tolerance outside `[0, 1)`
    InvalidToleranceValue,
    /// Regular expression failed to compile
    InvalidRegex,
    /// Pattern or value nested deeper than the configured limit
    NestingTooDeep,
    /// Other configuration parameter out of range
    InvalidParameter,
    /// Matcher reached a state its dispatch order rules out
    InternalInvariantViolation,
}

/// Main JQL error type
///
/// A non-match is never an error: matching returns `Ok(false)` for that.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JqlError {
    #[error("Invalid pattern node: {0}")]
    InvalidPatternType(String),

    #[error("Invalid value node: {0}")]
    InvalidValueType(String),

    #[error("Relative tolerance must lie in [0, 1), got {0}")]
    InvalidToleranceValue(f64),

    #[error("Invalid regular expression '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("Nesting exceeds the configured limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl JqlError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JqlError::InvalidPatternType(_) => ErrorKind::InvalidPatternType,
            JqlError::InvalidValueType(_) => ErrorKind::InvalidValueType,
            JqlError::InvalidToleranceValue(_) => ErrorKind::InvalidToleranceValue,
            JqlError::InvalidRegex { .. } => ErrorKind::InvalidRegex,
            JqlError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            JqlError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            JqlError::InternalInvariantViolation(_) => ErrorKind::InternalInvariantViolation,
        }
    }

    /// Whether this error signals a defect in the matcher itself
    ///
    /// Fatal errors must be propagated; they never stand in for a non-match.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::InternalInvariantViolation
    }

    /// Whether this error was caused by the caller's options
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidToleranceValue | ErrorKind::InvalidParameter
        )
    }
}
