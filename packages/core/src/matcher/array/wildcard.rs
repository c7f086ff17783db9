//! Zero-or-more wildcards inside array patterns
//!
//! Matching runs in two phases:
//!
//! 1. The concrete tail after the last wildcard is anchored to the end of the
//!    value. Its first value position becomes the right boundary, and no
//!    element left of the last wildcard may match at or past it.
//! 2. The pattern is scanned from the left. Concrete elements consume value
//!    elements in lockstep. After a run of wildcards, the next concrete
//!    element is anchored at the first value position before the boundary
//!    that it matches, and scanning resumes after that position. Reaching the
//!    last wildcard means everything up to the boundary is absorbed.
//!
//! Each anchor commits to its first fit. A later mismatch does not retry the
//! anchor at a further position, so some values that an exhaustive
//! backtracking search would accept are rejected, e.g. `["x", *, "a", "b", *]`
//! against `["x", "a", "c", "a", "b"]`.

use std::vec;

use crate::matcher::frame::{Frame, Outcome, Pair, Step};
use crate::pattern::Pattern;
use crate::value::Value;

#[derive(Debug, Clone, Copy)]
enum ScanPhase {
    /// Matching the concrete tail from the right
    Tail,
    /// Matching a concrete element at `next_item`
    Lockstep,
    /// Trying the current anchor at this value position
    Anchor(usize),
}

/// Resumable state of one wildcard array match
pub(in crate::matcher) struct WildcardScan<'a> {
    patterns: &'a [Pattern],
    items: &'a [Value],
    depth: usize,
    /// Position of the rightmost wildcard in `patterns`
    last_wildcard: usize,
    /// First value position claimed by the tail
    boundary: usize,
    tail: vec::IntoIter<Pair<'a>>,
    cursor: usize,
    next_item: usize,
    phase: ScanPhase,
}

/// `last_wildcard` is the position of the rightmost wildcard in `patterns`
pub(super) fn wildcard_frame<'a>(
    patterns: &'a [Pattern],
    items: &'a [Value],
    last_wildcard: usize,
    depth: usize,
) -> Outcome<'a> {
    let tail = &patterns[last_wildcard + 1..];
    let Some(boundary) = items.len().checked_sub(tail.len()) else {
        return Outcome::Decided(false);
    };
    let tail: Vec<Pair<'a>> = tail.iter().rev().zip(items.iter().rev()).collect();

    Frame::WildcardScan(WildcardScan {
        patterns,
        items,
        depth,
        last_wildcard,
        boundary,
        tail: tail.into_iter(),
        cursor: 0,
        next_item: 0,
        phase: ScanPhase::Tail,
    })
    .into()
}

impl<'a> WildcardScan<'a> {
    pub(in crate::matcher) fn resume(&mut self, matched: bool) -> Step<'a> {
        match self.phase {
            ScanPhase::Tail => {
                if !matched {
                    return Step::Done(false);
                }
                if let Some(pair) = self.tail.next() {
                    return Step::child(pair, self.depth);
                }
                if self.last_wildcard == 0 {
                    return Step::Done(true);
                }
                self.advance()
            }
            ScanPhase::Lockstep => {
                if !matched {
                    return Step::Done(false);
                }
                self.cursor += 1;
                self.next_item += 1;
                self.advance()
            }
            ScanPhase::Anchor(position) => {
                if !matched {
                    return self.anchor_from(position + 1);
                }
                tracing::trace!(
                    target: "jql::matcher",
                    pattern_index = self.cursor,
                    position,
                    "Wildcard anchor committed"
                );
                self.cursor += 1;
                self.next_item = position + 1;
                self.advance()
            }
        }
    }

    /// Move the left scan forward to its next child decision
    fn advance(&mut self) -> Step<'a> {
        let patterns = self.patterns;
        if self.cursor >= self.last_wildcard {
            return Step::Done(true);
        }

        if !patterns[self.cursor].is_wildcard() {
            if self.next_item >= self.boundary {
                return Step::Done(false);
            }
            self.phase = ScanPhase::Lockstep;
            let items = self.items;
            return Step::child((&patterns[self.cursor], &items[self.next_item]), self.depth);
        }

        while self.cursor < self.last_wildcard && patterns[self.cursor].is_wildcard() {
            self.cursor += 1;
        }
        if self.cursor == self.last_wildcard {
            return Step::Done(true);
        }
        self.anchor_from(self.next_item)
    }

    /// Try the anchor at `cursor` against the first remaining position from `position`
    fn anchor_from(&mut self, position: usize) -> Step<'a> {
        if position >= self.boundary {
            tracing::trace!(
                target: "jql::matcher",
                pattern_index = self.cursor,
                from = self.next_item,
                boundary = self.boundary,
                "No value position fits wildcard anchor"
            );
            return Step::Done(false);
        }
        self.phase = ScanPhase::Anchor(position);
        let (patterns, items) = (self.patterns, self.items);
        Step::child((&patterns[self.cursor], &items[position]), self.depth)
    }
}
