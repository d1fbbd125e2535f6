//! Matching, searching and positional access

use crate::error::{QualifiedNameError, Result};
use crate::name::QualifiedName;

impl QualifiedName {
    /// Match this name against another, segment by segment from the end
    ///
    /// `predicate` receives `(segment of self, segment of other)` for each
    /// aligned position, starting at the last segments. The walk ends when
    /// `other` runs out:
    /// - if `self` ran out first the match fails
    /// - if `match_all` is set, `self` must run out at the same time
    ///
    /// Two empty names always match.
    ///
    /// The receiver is the longer side: `a.b.c` matches `b.c` with
    /// `match_all` unset, but `b.c` does not match `a.b.c`. Callers that
    /// hold the suffix should call it on the full name instead, the way
    /// [`QualifiedName::ends_with`] does.
    pub fn matches<F>(&self, other: &QualifiedName, mut predicate: F, match_all: bool) -> bool
    where
        F: FnMut(&str, &str) -> bool,
    {
        let mut mine = self.segments_rev();
        for theirs in other.segments_rev() {
            match mine.next() {
                Some(segment) if predicate(segment, theirs) => {}
                _ => return false,
            }
        }
        !match_all || mine.next().is_none()
    }

    /// Check if the trailing segments equal `suffix`
    #[must_use]
    pub fn ends_with(&self, suffix: &QualifiedName) -> bool {
        self.matches(suffix, |mine, theirs| mine == theirs, false)
    }

    /// Check if the leading segments equal `prefix`
    ///
    /// Same answer as `self.reverse().ends_with(&prefix.reverse())`, without
    /// building either reversal.
    #[must_use]
    pub fn starts_with(&self, prefix: &QualifiedName) -> bool {
        prefix.len() <= self.len() && self.left(prefix.len()) == *prefix
    }

    /// Check if this is a strict prefix of `other`
    #[must_use]
    pub fn is_ancestor_of(&self, other: &QualifiedName) -> bool {
        self.len() < other.len() && other.starts_with(self)
    }

    /// Longest shared leading run of segments
    #[must_use]
    pub fn common_prefix(&self, other: &QualifiedName) -> QualifiedName {
        let shared = self
            .segments()
            .zip(other.segments())
            .take_while(|(a, b)| a == b)
            .count();
        self.left(shared)
    }

    /// Distance from the last segment to the nearest segment matching
    /// `predicate` (the last segment is `0`)
    pub fn index_from_end<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&str) -> bool,
    {
        self.segments_rev().position(predicate)
    }

    /// Position of the first segment matching `predicate`
    pub fn index_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&str) -> bool,
    {
        self.segments().position(predicate)
    }

    /// Check if any segment matches `predicate`
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&str) -> bool,
    {
        self.segments_rev().any(predicate)
    }

    /// Segment at `index`, counting from the first
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::IndexOutOfRange`] unless `index < len()`
    pub fn get(&self, index: usize) -> Result<&str> {
        let len = self.len();
        if index >= len {
            return Err(QualifiedNameError::out_of_range(index, len));
        }
        self.get_from_end(len - 1 - index)
    }

    /// Segment at `index`, counting back from the last
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::IndexOutOfRange`] unless `index < len()`
    pub fn get_from_end(&self, index: usize) -> Result<&str> {
        self.segments_rev()
            .nth(index)
            .ok_or_else(|| QualifiedNameError::out_of_range(index, self.len()))
    }
}
