//! JQL Builder API modules
//!
//! Fluent configuration of a match and reusable validated queries.

pub mod core;
pub mod query;

pub use self::core::*;
pub use self::query::*;
