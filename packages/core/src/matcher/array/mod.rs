//! Array patterns against array values
//!
//! An array pattern without wildcards must line up with the value element by
//! element. A `Pattern::Wildcard` element absorbs zero or more value
//! elements; see [`wildcard`] for how gaps are resolved.

mod exact;
mod wildcard;

pub(super) use self::wildcard::WildcardScan;

use super::frame::Outcome;
use crate::pattern::Pattern;
use crate::value::Value;

pub(super) fn array_frame<'a>(patterns: &'a [Pattern], items: &'a [Value], depth: usize) -> Outcome<'a> {
    if patterns.is_empty() {
        return Outcome::Decided(items.is_empty());
    }
    match patterns.iter().rposition(Pattern::is_wildcard) {
        Some(last_wildcard) => wildcard::wildcard_frame(patterns, items, last_wildcard, depth),
        None => exact::exact_frame(patterns, items, depth),
    }
}
