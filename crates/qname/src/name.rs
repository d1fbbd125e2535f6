//! The qualified name chain
//!
//! Provides [`QualifiedName`], an immutable sequence of string segments stored
//! as a persistent chain: every node points at its enclosing scope (its
//! parent) and holds one segment. Adding a segment allocates a single node and
//! shares the whole parent chain, so `a.b.c` and `a.b.d` reuse the same `a.b`.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{QualifiedNameError, Result};

/// Hierarchical identifier made of string segments
///
/// The empty name has no segments and encloses every single-segment name.
/// Values never change after construction; every operation that "modifies" a
/// name returns a new one. Cloning is cheap (one reference count bump).
///
/// Equality, ordering and hashing are structural: two names are equal when
/// they hold the same segments in the same order, however they were built.
///
/// # Examples
/// ```
/// use qname::QualifiedName;
///
/// let name = QualifiedName::of("a").add("b").add("c");
/// assert_eq!(name.len(), 3);
/// assert_eq!(name.to_string(), "a.b.c");
/// assert_eq!(name, QualifiedName::of_all(["a", "b", "c"]));
/// ```
#[derive(Clone, Default)]
pub struct QualifiedName(Chain);

#[derive(Clone, Default)]
enum Chain {
    #[default]
    Empty,
    Node(Arc<Node>),
}

/// One link of the chain
pub(crate) struct Node {
    parent: QualifiedName,
    segment: String,
    len: usize,
}

impl Node {
    #[inline]
    pub(crate) fn parent(&self) -> &QualifiedName {
        &self.parent
    }

    #[inline]
    pub(crate) fn segment(&self) -> &str {
        &self.segment
    }
}

// Unlinks the chain one node at a time so long names don't exhaust the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = mem::take(&mut self.parent.0);
        while let Chain::Node(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => next = mem::take(&mut owned.parent.0),
                Err(_) => break,
            }
        }
    }
}

impl QualifiedName {
    /// The empty name
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(Chain::Empty)
    }

    /// Name with a single segment
    ///
    /// Equivalent to `QualifiedName::empty().add(segment)`.
    #[inline]
    #[must_use]
    pub fn of(segment: impl Into<String>) -> Self {
        Self::empty().add(segment)
    }

    /// Name built from segments, outermost first
    #[must_use]
    pub fn of_all<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::empty().add_all(segments)
    }

    /// Append a segment, returning the new name
    ///
    /// The receiver becomes the parent of the result and is left untouched.
    #[must_use]
    pub fn add(&self, segment: impl Into<String>) -> Self {
        let node = Node {
            parent: self.clone(),
            segment: segment.into(),
            len: self.len() + 1,
        };
        Self(Chain::Node(Arc::new(node)))
    }

    /// Append a segment that may be absent
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::InvalidSegment`] if `segment` is `None`
    pub fn try_add<S: Into<String>>(&self, segment: Option<S>) -> Result<Self> {
        match segment {
            Some(segment) => Ok(self.add(segment)),
            None => Err(QualifiedNameError::InvalidSegment {
                position: self.len(),
            }),
        }
    }

    /// Append several segments in order
    ///
    /// Equivalent to `name.add(s0).add(s1)...`.
    #[must_use]
    pub fn add_all<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments
            .into_iter()
            .fold(self.clone(), |name, segment| name.add(segment))
    }

    /// Append several segments, any of which may be absent
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::InvalidSegment`] carrying the input
    /// position of the first absent segment; nothing is returned for the
    /// segments before it.
    pub fn try_add_all<I, S>(&self, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        segments
            .into_iter()
            .enumerate()
            .try_fold(self.clone(), |name, (position, segment)| match segment {
                Some(segment) => Ok(name.add(segment)),
                None => Err(QualifiedNameError::InvalidSegment { position }),
            })
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.0 {
            Chain::Empty => 0,
            Chain::Node(node) => node.len,
        }
    }

    /// Check if this is the empty name
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.0, Chain::Empty)
    }

    /// Enclosing scope (`None` for the empty name)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&QualifiedName> {
        self.node().map(Node::parent)
    }

    /// Last (innermost) segment
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.node().map(Node::segment)
    }

    /// First (outermost) segment
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.segments_rev().last()
    }

    #[inline]
    pub(crate) fn node(&self) -> Option<&Node> {
        match &self.0 {
            Chain::Empty => None,
            Chain::Node(node) => Some(node),
        }
    }

    /// Both names are the same allocation (or both empty)
    #[inline]
    fn same_chain(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Chain::Empty, Chain::Empty) => true,
            (Chain::Node(a), Chain::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (mut left, mut right) = (self, other);
        loop {
            if left.same_chain(right) {
                return true;
            }
            match (left.node(), right.node()) {
                (Some(a), Some(b)) => {
                    if a.segment != b.segment {
                        return false;
                    }
                    left = &a.parent;
                    right = &b.parent;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for QualifiedName {}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.same_chain(other) {
            return Ordering::Equal;
        }
        self.segments().cmp(other.segments())
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for segment in self.segments() {
            segment.hash(state);
        }
    }
}

impl Debug for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct SegmentList<'a>(&'a QualifiedName);

        impl Debug for SegmentList<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.segments()).finish()
            }
        }

        f.debug_tuple("QualifiedName")
            .field(&SegmentList(self))
            .finish()
    }
}

impl<S: Into<String>> FromIterator<S> for QualifiedName {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of_all(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for QualifiedName {
    fn from(segments: Vec<S>) -> Self {
        Self::of_all(segments)
    }
}

impl From<&[&str]> for QualifiedName {
    fn from(segments: &[&str]) -> Self {
        Self::of_all(segments.iter().copied())
    }
}

/// Build a name from a JSON string (one segment) or array of strings
impl TryFrom<&JsonValue> for QualifiedName {
    type Error = QualifiedNameError;

    fn try_from(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(segment) => Ok(Self::of(segment.as_str())),
            JsonValue::Array(items) => Self::empty().try_add_all(items.iter().map(JsonValue::as_str)),
            _ => Err(QualifiedNameError::InvalidSegment { position: 0 }),
        }
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.segments())
    }
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let segments = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::of_all(segments))
    }
}
