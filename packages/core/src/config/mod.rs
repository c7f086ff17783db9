//! Matcher configuration
//!
//! `MatchOptions` carries every knob of a match call. Options are validated
//! once when a [`Matcher`](crate::matcher::Matcher) is built and are
//! immutable afterwards.

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{ConfigDefaults, ConfigValidator, Validator};

use crate::error::JqlResult;

/// Options for a match call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Relative tolerance for float/float comparisons, in `[0, 1)`
    pub relative_tolerance: f64,
    /// Maximum nesting depth descended before matching gives up
    pub max_depth: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            relative_tolerance: ConfigDefaults::RELATIVE_TOLERANCE,
            max_depth: ConfigDefaults::MAX_DEPTH,
        }
    }
}

impl MatchOptions {
    /// Create options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative tolerance used for float comparisons
    #[must_use]
    pub fn with_relative_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_tolerance = tolerance;
        self
    }

    /// Set the nesting limit
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Validator for MatchOptions {
    fn validate(&self) -> JqlResult<()> {
        ConfigValidator::validate_tolerance(self.relative_tolerance)?;
        ConfigValidator::validate_range(
            self.max_depth,
            1,
            ConfigDefaults::MAX_DEPTH_CEILING,
            "max_depth",
        )?;
        tracing::trace!(
            target: "jql::config",
            relative_tolerance = self.relative_tolerance,
            max_depth = self.max_depth,
            "Match options validated"
        );
        Ok(())
    }
}
