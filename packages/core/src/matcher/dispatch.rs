//! Type-pair dispatch
//!
//! Rules are tried in order and the first applicable one decides. Several
//! categories overlap, so the order is part of the contract: wildcards and
//! alternatives come first, and bool pairs are settled before any numeric
//! rule so that `true` never matches `1`.

use hashbrown::HashSet;

use super::Matcher;
use super::array::array_frame;
use super::frame::{Conjunction, Outcome};
use super::leaf::{float_equals_int, floats_close};
use super::object::subtree_frame;
use super::selector::list_selector_frame;
use crate::error::{JqlError, JqlResult};
use crate::pattern::{Pattern, PatternKey};
use crate::value::Value;

impl Matcher {
    /// Classify one (pattern, value) pair
    ///
    /// Leaf pairs are decided here. Container pairs come back as a frame
    /// whose children sit at `depth + 1`.
    pub(super) fn enter<'a>(
        &self,
        pattern: &'a Pattern,
        value: &'a Value,
        depth: usize,
    ) -> JqlResult<Outcome<'a>> {
        if depth > self.options.max_depth {
            tracing::debug!(
                target: "jql::matcher",
                limit = self.options.max_depth,
                "Nesting limit exceeded"
            );
            return Err(JqlError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        validate_pattern_node(pattern)?;

        let decided = match (pattern, value) {
            (Pattern::Wildcard, _) => true,
            (Pattern::Alternatives(alternatives), _) => {
                let candidates = alternatives.iter().map(|alternative| (alternative, value));
                return Ok(Conjunction::any(depth, candidates.collect()).into());
            }
            (Pattern::Null, Value::Null) => true,
            (Pattern::Bool(a), Value::Bool(b)) => a == b,
            (Pattern::Bool(_), _) | (_, Value::Bool(_)) => false,
            (Pattern::Float(a), Value::Float(b)) => {
                floats_close(*a, *b, self.options.relative_tolerance)
            }
            (Pattern::Float(a), Value::Int(b)) => float_equals_int(*a, *b),
            (Pattern::Int(a), Value::Float(b)) => float_equals_int(*b, *a),
            (Pattern::Int(a), Value::Int(b)) => a == b,
            (Pattern::String(a), Value::String(b)) => a == b,
            (Pattern::Regex(regex), Value::String(text)) => regex.full_match(text),
            (Pattern::Object(entries), Value::Object(map)) => {
                return Ok(subtree_frame(entries, map, depth));
            }
            (Pattern::Object(entries), Value::Array(items)) => {
                return Ok(list_selector_frame(entries, items, depth));
            }
            (Pattern::Array(patterns), Value::Array(items)) => {
                return Ok(array_frame(patterns, items, depth));
            }
            _ => {
                if same_scalar_kind(pattern, value) {
                    tracing::error!(
                        target: "jql::matcher",
                        pattern = pattern.kind(),
                        value = value.kind(),
                        "Scalar pair fell through dispatch"
                    );
                    return Err(JqlError::invariant_violation(pattern.kind(), value.kind()));
                }
                false
            }
        };

        Ok(Outcome::Decided(decided))
    }
}

/// Check the local shape of a pattern node
///
/// Children are checked when the dispatcher reaches them.
fn validate_pattern_node(pattern: &Pattern) -> JqlResult<()> {
    let Pattern::Object(entries) = pattern else {
        return Ok(());
    };

    let mut wildcards = 0usize;
    let mut seen = HashSet::with_capacity(entries.len());
    for (key, _) in entries {
        match key {
            PatternKey::Wildcard => wildcards += 1,
            PatternKey::Key(key) => {
                if !seen.insert(key) {
                    return Err(JqlError::invalid_pattern(format!(
                        "object pattern repeats key {key}"
                    )));
                }
            }
        }
    }

    if wildcards > 1 {
        return Err(JqlError::invalid_pattern(format!(
            "object pattern has {wildcards} wildcard keys, at most one is allowed"
        )));
    }
    Ok(())
}

fn same_scalar_kind(pattern: &Pattern, value: &Value) -> bool {
    matches!(
        (pattern, value),
        (Pattern::Null, Value::Null)
            | (Pattern::Bool(_), Value::Bool(_))
            | (Pattern::Int(_), Value::Int(_))
            | (Pattern::Float(_), Value::Float(_))
            | (Pattern::String(_), Value::String(_))
    )
}
