//! Explicit frame stack driving the match
//!
//! Container matchers never call back into the dispatcher. They return a
//! [`Frame`] that asks for one child decision at a time, and [`Matcher::run`]
//! keeps the pending frames on a heap-allocated stack. Nesting depth is then
//! bounded by `max_depth` alone, not by the size of the thread's call stack.

use std::vec;

use super::Matcher;
use super::array::WildcardScan;
use crate::error::JqlResult;
use crate::pattern::Pattern;
use crate::value::Value;

/// A (pattern, value) pair awaiting a decision
pub(super) type Pair<'a> = (&'a Pattern, &'a Value);

/// What a frame needs next
pub(super) enum Step<'a> {
    /// Decide `pattern` against `value` at `depth` and report back
    Descend {
        pattern: &'a Pattern,
        value: &'a Value,
        depth: usize,
    },
    /// The frame is finished
    Done(bool),
}

impl<'a> Step<'a> {
    /// Descend into `pair` one level below `depth`
    #[inline]
    pub(super) fn child((pattern, value): Pair<'a>, depth: usize) -> Self {
        Step::Descend {
            pattern,
            value,
            depth: depth + 1,
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Result of entering a node: decided on the spot or pending on children
pub(super) enum Outcome<'a> {
    Decided(bool),
    Pending(Frame<'a>),
}

impl<'a> From<Frame<'a>> for Outcome<'a> {
    fn from(frame: Frame<'a>) -> Self {
        Outcome::Pending(frame)
    }
}

pub(super) enum Frame<'a> {
    Conjunction(Conjunction<'a>),
    WildcardScan(WildcardScan<'a>),
}

impl<'a> Frame<'a> {
    /// Feed the previous child decision in and get the next step
    ///
    /// Every frame starts by being resumed with `true`.
    fn resume(&mut self, matched: bool) -> Step<'a> {
        match self {
            Frame::Conjunction(frame) => frame.resume(matched),
            Frame::WildcardScan(frame) => frame.resume(matched),
        }
    }
}

impl<'a> From<Conjunction<'a>> for Outcome<'a> {
    fn from(frame: Conjunction<'a>) -> Self {
        Outcome::Pending(Frame::Conjunction(frame))
    }
}

/// Every required pair must match, then one witness pair must match if a
/// witness set was given
///
/// Required pairs are decided in order and the first mismatch ends the
/// frame. Witnesses are tried in order until one matches; an empty witness
/// set fails. Alternatives are a conjunction with no required pairs.
pub(super) struct Conjunction<'a> {
    depth: usize,
    required: vec::IntoIter<Pair<'a>>,
    witnesses: Option<vec::IntoIter<Pair<'a>>>,
    searching: bool,
}

impl<'a> Conjunction<'a> {
    pub(super) fn all(depth: usize, required: Vec<Pair<'a>>) -> Self {
        Self {
            depth,
            required: required.into_iter(),
            witnesses: None,
            searching: false,
        }
    }

    pub(super) fn any(depth: usize, witnesses: Vec<Pair<'a>>) -> Self {
        Self::all(depth, Vec::new()).with_witnesses(witnesses)
    }

    #[must_use]
    pub(super) fn with_witnesses(mut self, witnesses: Vec<Pair<'a>>) -> Self {
        self.witnesses = Some(witnesses.into_iter());
        self
    }

    fn resume(&mut self, matched: bool) -> Step<'a> {
        if self.searching {
            if matched {
                return Step::Done(true);
            }
        } else {
            if !matched {
                return Step::Done(false);
            }
            if let Some(pair) = self.required.next() {
                return Step::child(pair, self.depth);
            }
            if self.witnesses.is_none() {
                return Step::Done(true);
            }
            self.searching = true;
        }

        match self.witnesses.as_mut().and_then(Iterator::next) {
            Some(pair) => Step::child(pair, self.depth),
            None => Step::Done(false),
        }
    }
}

impl Matcher {
    /// Run the match to completion without recursing on the call stack
    pub(super) fn run<'a>(&self, pattern: &'a Pattern, value: &'a Value) -> JqlResult<bool> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        let mut step = Step::Descend {
            pattern,
            value,
            depth: 0,
        };

        loop {
            step = match step {
                Step::Descend {
                    pattern,
                    value,
                    depth,
                } => match self.enter(pattern, value, depth)? {
                    Outcome::Decided(matched) => Step::Done(matched),
                    Outcome::Pending(mut frame) => {
                        let next = frame.resume(true);
                        if !next.is_done() {
                            stack.push(frame);
                        }
                        next
                    }
                },
                Step::Done(matched) => {
                    let Some(frame) = stack.last_mut() else {
                        return Ok(matched);
                    };
                    let next = frame.resume(matched);
                    if next.is_done() {
                        stack.pop();
                    }
                    next
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_pairs_short_circuit() {
        let (pattern, value) = (Pattern::Int(1), Value::Int(1));
        let mut frame = Conjunction::all(3, vec![(&pattern, &value), (&pattern, &value)]);
        assert!(matches!(frame.resume(true), Step::Descend { depth: 4, .. }));
        assert!(matches!(frame.resume(false), Step::Done(false)));
    }

    #[test]
    fn test_witnesses_follow_required_pairs() {
        let (pattern, value) = (Pattern::Int(1), Value::Int(1));
        let mut frame = Conjunction::all(0, vec![(&pattern, &value)])
            .with_witnesses(vec![(&pattern, &value), (&pattern, &value)]);
        assert!(matches!(frame.resume(true), Step::Descend { .. }));
        assert!(matches!(frame.resume(true), Step::Descend { .. }));
        assert!(matches!(frame.resume(false), Step::Descend { .. }));
        assert!(matches!(frame.resume(false), Step::Done(false)));
    }

    #[test]
    fn test_empty_witness_set_fails() {
        assert!(matches!(Conjunction::any(0, Vec::new()).resume(true), Step::Done(false)));
        assert!(matches!(Conjunction::all(0, Vec::new()).resume(true), Step::Done(true)));
    }
}
