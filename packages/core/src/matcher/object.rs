//! Object patterns against object values
//!
//! The pattern describes a subset of the value's keys. A wildcard key asks
//! for at least one further key, not named explicitly, whose entry matches
//! the wildcard's sub-pattern.

use hashbrown::HashSet;

use super::frame::{Conjunction, Outcome};
use crate::pattern::{Pattern, PatternKey};
use crate::value::{Key, ObjectMap};

/// Explicit entries and the optional wildcard sub-pattern of an object pattern
pub(super) struct ObjectEntries<'p> {
    pub explicit: Vec<(&'p Key, &'p Pattern)>,
    pub rest: Option<&'p Pattern>,
}

impl<'p> ObjectEntries<'p> {
    /// Split validated entries; the dispatcher has already rejected a second wildcard
    pub fn split(entries: &'p [(PatternKey, Pattern)]) -> Self {
        let mut explicit = Vec::with_capacity(entries.len());
        let mut rest = None;
        for (key, pattern) in entries {
            match key {
                PatternKey::Key(key) => explicit.push((key, pattern)),
                PatternKey::Wildcard => rest = Some(pattern),
            }
        }
        Self { explicit, rest }
    }
}

/// Subtree match of `entries` against `map`
///
/// Every explicit key is looked up before any sub-pattern is matched, so a
/// missing key rejects the pattern without descending.
pub(super) fn subtree_frame<'a>(
    entries: &'a [(PatternKey, Pattern)],
    map: &'a ObjectMap,
    depth: usize,
) -> Outcome<'a> {
    if entries.is_empty() {
        return Outcome::Decided(true);
    }

    let ObjectEntries { explicit, rest } = ObjectEntries::split(entries);
    if explicit.len() > map.len() {
        return Outcome::Decided(false);
    }

    let mut required = Vec::with_capacity(explicit.len());
    for (key, pattern) in &explicit {
        let Some(item) = map.get(*key) else {
            tracing::trace!(target: "jql::matcher", key = %key, "Pattern key absent from value");
            return Outcome::Decided(false);
        };
        required.push((*pattern, item));
    }
    let frame = Conjunction::all(depth, required);

    let Some(rest) = rest else {
        return frame.into();
    };
    let claimed: HashSet<&Key> = explicit.iter().map(|(key, _)| *key).collect();
    let witnesses = map
        .iter()
        .filter(|(key, _)| !claimed.contains(key))
        .map(|(_, item)| (rest, item))
        .collect();
    frame.with_witnesses(witnesses).into()
}
