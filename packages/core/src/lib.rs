//! # JQL Core
//!
//! Structural pattern matching for JSON-like value trees. A [`Pattern`]
//! describes the shape a [`Value`] must have and [`matches`] answers yes or
//! no. Nothing is extracted or rewritten.
//!
//! ## Pattern language
//!
//! - **Scalars** match equal scalars. Bools never match numbers. Float pairs
//!   compare with a relative tolerance, int/float pairs compare exactly.
//! - **Regex** patterns must match the whole string.
//! - **Alternatives** match when any alternative matches, tried in order.
//! - **Objects** describe a subset of a value object's keys. Against an array,
//!   integer keys select positions, negative ones counting from the end.
//!   One wildcard key may ask for some further key or position.
//! - **Arrays** match element-wise; `Wildcard` elements absorb zero or more
//!   value elements.
//!
//! ## Usage
//!
//! ```rust
//! use jql_core::prelude::*;
//!
//! let pattern = Pattern::array([Pattern::from(1), Pattern::Wildcard, Pattern::from(1)]);
//! let value = Value::array([1, 1, 1]);
//!
//! assert!(matches(&pattern, &value, &MatchOptions::default()).unwrap_or(false));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod value;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
