//! Slicing and reversal
//!
//! Counts are numbers of segments measured from one end and are clamped:
//! asking for more segments than a name has yields the whole name (or the
//! empty name when the count says what to drop).
//!
//! Slices that keep a leading run share the receiver's chain; slices that keep
//! a trailing run need fresh nodes because their root differs.

use smallvec::SmallVec;

use crate::name::QualifiedName;

impl QualifiedName {
    /// Drop the last `count` segments
    ///
    /// `0` returns the receiver; `count >= len()` returns the empty name.
    #[must_use]
    pub fn left_from_end(&self, count: usize) -> QualifiedName {
        let mut current = self;
        for _ in 0..count {
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current.clone()
    }

    /// Keep the leading `count` segments
    #[must_use]
    pub fn left(&self, count: usize) -> QualifiedName {
        self.left_from_end(self.len().saturating_sub(count))
    }

    /// Keep the trailing `count` segments
    ///
    /// `0` returns the empty name; `count >= len()` returns the receiver.
    #[must_use]
    pub fn right_last(&self, count: usize) -> QualifiedName {
        if count == 0 {
            return QualifiedName::empty();
        }
        if count >= self.len() {
            return self.clone();
        }
        let tail: SmallVec<[&str; 8]> = self.segments_rev().take(count).collect();
        QualifiedName::of_all(tail.into_iter().rev())
    }

    /// Drop the leading `count` segments
    #[must_use]
    pub fn right_from_start(&self, count: usize) -> QualifiedName {
        self.right_last(self.len().saturating_sub(count))
    }

    /// Leading segments up to and including the first one matching
    /// `predicate`
    ///
    /// Returns the whole name when nothing matches.
    #[must_use]
    pub fn up_to<P>(&self, mut predicate: P) -> QualifiedName
    where
        P: FnMut(&str) -> bool,
    {
        self.fold_outward_while(
            QualifiedName::empty(),
            |acc, segment| acc.add(segment),
            |acc| match acc.last() {
                Some(last) => !predicate(last),
                None => true,
            },
        )
    }

    /// Trailing segments after the last one matching `predicate`
    ///
    /// The matching segment itself is not included. Returns the whole name
    /// when nothing matches.
    #[must_use]
    pub fn from_end<P>(&self, mut predicate: P) -> QualifiedName
    where
        P: FnMut(&str) -> bool,
    {
        self.fold_inward_while(
            QualifiedName::empty(),
            |acc, segment| acc.add(segment),
            |_, segment| !predicate(segment),
        )
        .reverse()
    }

    /// Segments in reverse order
    #[must_use]
    pub fn reverse(&self) -> QualifiedName {
        self.fold_inward(QualifiedName::empty(), |acc, segment| acc.add(segment))
    }
}
