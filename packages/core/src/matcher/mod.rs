//! Structural matching engine
//!
//! [`Matcher`] holds validated [`MatchOptions`] and decides whether a
//! [`Pattern`] matches a [`Value`]. Matching is a pure function of its
//! inputs: a `Matcher` carries no state between calls and can be shared
//! freely across threads.
//!
//! The dispatcher in [`dispatch`] routes every (pattern, value) pair through
//! an ordered chain of type-pair rules. Container matchers hand back a frame
//! that requests child decisions one at a time, and [`frame`] drives those
//! frames from an explicit stack:
//!
//! - [`leaf`] - null, bool, numeric, string and regex comparisons
//! - [`object`] - object patterns against object values (subtree match)
//! - [`selector`] - object patterns against array values (index selectors)
//! - [`array`] - array patterns, exact and with zero-or-more wildcards

mod array;
mod dispatch;
mod frame;
pub mod leaf;
mod object;
pub mod selector;

pub use selector::normalize_index;

use crate::config::{MatchOptions, Validator};
use crate::error::JqlResult;
use crate::pattern::Pattern;
use crate::value::Value;

/// Pattern matcher with validated options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    /// Create a matcher after validating `options`
    ///
    /// # Errors
    /// Returns `JqlError::InvalidToleranceValue` if the relative tolerance is
    /// outside `[0, 1)`, or `JqlError::InvalidParameter` if `max_depth` is out
    /// of range.
    pub fn new(options: MatchOptions) -> JqlResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options this matcher was built with
    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Decide whether `pattern` matches `value`
    ///
    /// # Errors
    /// A non-match is `Ok(false)`. Errors are reserved for:
    /// - `InvalidPatternType` - an object pattern with several wildcard keys
    ///   or a repeated explicit key
    /// - `NestingTooDeep` - the trees nest deeper than `max_depth`
    /// - `InternalInvariantViolation` - a defect in the matcher itself
    pub fn matches(&self, pattern: &Pattern, value: &Value) -> JqlResult<bool> {
        self.run(pattern, value)
    }
}

/// Decide whether `pattern` matches `value` under `options`
///
/// # Errors
/// Returns the option validation errors of [`Matcher::new`] and the matching
/// errors of [`Matcher::matches`].
pub fn matches(pattern: &Pattern, value: &Value, options: &MatchOptions) -> JqlResult<bool> {
    Matcher::new(*options)?.matches(pattern, value)
}
