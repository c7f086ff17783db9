use crate::matcher::frame::{Conjunction, Outcome};
use crate::pattern::Pattern;
use crate::value::Value;

/// Element-wise match of a wildcard-free array pattern
pub(super) fn exact_frame<'a>(patterns: &'a [Pattern], items: &'a [Value], depth: usize) -> Outcome<'a> {
    if patterns.len() != items.len() {
        return Outcome::Decided(false);
    }
    Conjunction::all(depth, patterns.iter().zip(items).collect()).into()
}
