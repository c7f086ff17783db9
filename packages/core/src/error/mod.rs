//! JQL error handling module
//!
//! Error types, classification and constructors for pattern validation,
//! option validation and matching.

mod constructors;
mod types;

pub use types::{ErrorKind, JqlError, JqlResult};
