//! Full-match regular expression patterns
//!
//! A regex pattern matches a string value only when it matches the entire
//! string. The source is parsed on its own first, so unbalanced groups or a
//! trailing `(?x)` comment are judged as written. The parsed form is printed
//! back in canonical syntax and wrapped as `\A(?:...)\z`, which keeps every
//! branch inside the anchors. Compiled expressions are cached process-wide by
//! source text.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use regex::Regex;

use crate::error::{JqlError, JqlResult};

/// Upper bound on cached expressions
const REGEX_CACHE_CAPACITY: usize = 64;

/// Regex compilation cache keyed by unanchored source text
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the anchored regex for `source`, compiling and caching it if absent
    ///
    /// # Errors
    /// Returns `JqlError::InvalidRegex` if `source` does not compile.
    pub fn get_or_compile(&self, source: &str) -> JqlResult<Regex> {
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(source) {
                return Ok(regex.clone());
            }
        }

        let hir = regex_syntax::parse(source)
            .map_err(|e| JqlError::invalid_regex(source, e.to_string()))?;
        let regex = Regex::new(&format!(r"\A(?:{hir})\z"))
            .map_err(|e| JqlError::invalid_regex(source, e.to_string()))?;

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < REGEX_CACHE_CAPACITY {
                cache.insert(source.to_owned(), regex.clone());
            } else {
                log::debug!("Regex cache full, not caching pattern {source:?}");
            }
        }

        Ok(regex)
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::new();
}

/// Compiled regular expression pattern with its source text
#[derive(Clone)]
pub struct RegexPattern {
    source: String,
    regex: Regex,
}

impl RegexPattern {
    /// Compile `source` for full-match semantics
    ///
    /// # Errors
    /// Returns `JqlError::InvalidRegex` if `source` does not compile.
    pub fn new(source: impl Into<String>) -> JqlResult<Self> {
        let source = source.into();
        let regex = REGEX_CACHE.get_or_compile(&source)?;
        tracing::trace!(target: "jql::pattern", source = %source, "Compiled regex pattern");
        Ok(Self { source, regex })
    }

    /// Source text as given by the caller, without anchors
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True iff the expression matches all of `text`
    #[inline]
    #[must_use]
    pub fn full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Debug for RegexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegexPattern").field(&self.source).finish()
    }
}
