//! Object patterns against array values
//!
//! Integer keys address array positions. Negative keys count from the end,
//! so `-1` is the last element. Any key that is not an integer or does not
//! address an element makes the pattern a non-match.

use hashbrown::HashSet;

use super::frame::{Conjunction, Outcome};
use super::object::ObjectEntries;
use crate::pattern::{Pattern, PatternKey};
use crate::value::Value;

/// Resolve a possibly negative index against an array of length `len`
///
/// Valid indices lie in `[-len, len)`; negative ones resolve to
/// `index + len`. Returns `None` for anything else.
///
/// # Examples
/// ```
/// use jql_core::matcher::normalize_index;
///
/// assert_eq!(normalize_index(-1, 4), Some(3));
/// assert_eq!(normalize_index(3, 4), Some(3));
/// assert_eq!(normalize_index(-5, 4), None);
/// assert_eq!(normalize_index(4, 4), None);
/// ```
#[inline]
#[must_use]
pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 {
        index.checked_add(len)?
    } else {
        index
    };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Positional match of `entries` against `items`
///
/// Every key is resolved to a position before any sub-pattern is matched.
pub(super) fn list_selector_frame<'a>(
    entries: &'a [(PatternKey, Pattern)],
    items: &'a [Value],
    depth: usize,
) -> Outcome<'a> {
    if entries.is_empty() {
        return Outcome::Decided(true);
    }

    let ObjectEntries { explicit, rest } = ObjectEntries::split(entries);
    let mut selected = Vec::with_capacity(explicit.len());
    for (key, pattern) in explicit {
        match key
            .as_index()
            .and_then(|index| normalize_index(index, items.len()))
        {
            Some(position) => selected.push((position, pattern)),
            None => {
                tracing::trace!(
                    target: "jql::matcher",
                    key = %key,
                    len = items.len(),
                    "Selector key does not address an element"
                );
                return Outcome::Decided(false);
            }
        }
    }

    let required = selected
        .iter()
        .map(|(position, pattern)| (*pattern, &items[*position]))
        .collect();
    let frame = Conjunction::all(depth, required);

    let Some(rest) = rest else {
        return frame.into();
    };
    let claimed: HashSet<usize> = selected.iter().map(|(position, _)| *position).collect();
    let witnesses = items
        .iter()
        .enumerate()
        .filter(|(position, _)| !claimed.contains(position))
        .map(|(_, item)| (rest, item))
        .collect();
    frame.with_witnesses(witnesses).into()
}
