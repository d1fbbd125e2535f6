//! Segment iterators
//!
//! [`SegmentsRev`] walks parent links directly (leaf to root, no allocation).
//! [`Segments`] runs root to leaf; since the chain only links towards the
//! root, it borrows the segments into a small inline buffer first.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::name::QualifiedName;

/// Names up to this many segments iterate forward without a heap allocation
const INLINE_SEGMENTS: usize = 8;

/// Iterator over segments from last to first
#[derive(Debug, Clone)]
pub struct SegmentsRev<'a> {
    current: &'a QualifiedName,
}

impl<'a> Iterator for SegmentsRev<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        let node = self.current.node()?;
        self.current = node.parent();
        Some(node.segment())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.current.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SegmentsRev<'_> {}

impl FusedIterator for SegmentsRev<'_> {}

/// Iterator over segments from first to last
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: smallvec::IntoIter<[&'a str; INLINE_SEGMENTS]>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

impl QualifiedName {
    /// Segments from first (outermost) to last
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        let mut buffer: SmallVec<[&str; INLINE_SEGMENTS]> = self.segments_rev().collect();
        buffer.reverse();
        Segments {
            inner: buffer.into_iter(),
        }
    }

    /// Segments from last (innermost) to first
    #[inline]
    #[must_use]
    pub fn segments_rev(&self) -> SegmentsRev<'_> {
        SegmentsRev { current: self }
    }

    /// Segments collected into owned strings, outermost first
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.segments().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a QualifiedName {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}
