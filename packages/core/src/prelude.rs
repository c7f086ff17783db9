//! JQL Prelude
//!
//! The types needed to build patterns and values and run a match.

// Data model
pub use crate::pattern::{Pattern, PatternKey, RegexPattern};
pub use crate::value::{Key, ObjectMap, Value};

// Matching
pub use crate::matcher::{Matcher, matches};

// Configuration
pub use crate::config::{MatchOptions, Validator};

// Error types
pub use crate::error::{ErrorKind, JqlError, JqlResult};
