//! Error types for qualified names
//!
//! Two enums, one per concern:
//! - [`QualifiedNameError`] for construction, indexing and pattern failures
//! - [`FormatError`] for invalid separator/escape configurations
//!
//! Failures raised by caller-supplied transformers are never wrapped here;
//! [`QualifiedName::transform`](crate::QualifiedName::transform) hands them
//! back unchanged.

/// Errors raised by [`QualifiedName`](crate::QualifiedName) operations
#[derive(Debug, thiserror::Error)]
pub enum QualifiedNameError {
    /// A segment was absent where one was required
    #[error("cannot add an absent segment to a qualified name (position {position})")]
    InvalidSegment {
        /// Zero-based position of the offending segment in the input
        position: usize,
    },

    /// Position outside `[0, len)`
    #[error("segment index {index} out of range for name of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of segments in the name
        len: usize,
    },

    /// A pattern segment is not a valid regular expression
    #[error("invalid pattern segment '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl QualifiedNameError {
    /// Create index error
    #[inline]
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Errors raised when building a [`NameFormat`](crate::NameFormat)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Separator token is empty
    #[error("separator must not be empty")]
    EmptySeparator,

    /// Escape token is empty
    #[error("escape token must not be empty")]
    EmptyEscape,

    /// Separator and escape start with the same character
    #[error("separator '{separator}' and escape '{escape}' must start with different characters")]
    AmbiguousTokens {
        /// Separator token
        separator: String,
        /// Escape token
        escape: String,
    },
}

/// Result alias for qualified name operations
pub type Result<T, E = QualifiedNameError> = std::result::Result<T, E>;
