//! Option validation utilities
//!
//! Range checks and defaults shared by every matcher configuration.

use crate::error::{JqlError, JqlResult};

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `JqlError` variant if any validation fails:
    /// - `InvalidToleranceValue` - if the relative tolerance is outside `[0, 1)` or NaN
    /// - `InvalidParameter` - if any other parameter is outside its valid range
    fn validate(&self) -> JqlResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a relative tolerance
    ///
    /// # Errors
    ///
    /// Returns `JqlError::InvalidToleranceValue` unless `0 <= tolerance < 1`.
    /// NaN is rejected.
    pub fn validate_tolerance(tolerance: f64) -> JqlResult<()> {
        if (0.0..1.0).contains(&tolerance) {
            Ok(())
        } else {
            Err(JqlError::InvalidToleranceValue(tolerance))
        }
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `JqlError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> JqlResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(JqlError::invalid_parameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    /// Default relative tolerance for float/float comparisons
    pub const RELATIVE_TOLERANCE: f64 = 1e-15;

    /// Default nesting limit for pattern/value trees
    pub const MAX_DEPTH: usize = 512;

    /// Largest nesting limit accepted by validation
    pub const MAX_DEPTH_CEILING: usize = 65_536;
}
