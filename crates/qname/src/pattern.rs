//! Regular-expression matching of names
//!
//! A pattern is itself a qualified name whose segments are regular
//! expressions. Each expression must match the whole of the corresponding
//! segment; alignment is from the end, as in [`QualifiedName::matches`].

use regex::Regex;
use tracing::debug;

use crate::error::{QualifiedNameError, Result};
use crate::name::QualifiedName;

/// A qualified name of compiled regular expressions
///
/// Compile once with [`NamePattern::new`] and reuse for many names.
///
/// # Examples
/// ```
/// use qname::{NamePattern, QualifiedName};
///
/// let pattern = NamePattern::new(&QualifiedName::of_all(["p.*", "p.per", ".*d"])).unwrap();
/// assert!(pattern.matches(&QualifiedName::of_all(["peter", "piper", "picked"]), true));
/// assert!(!pattern.matches(&QualifiedName::of_all(["david", "piper", "picked"]), true));
/// ```
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: QualifiedName,
    /// One anchored regex per segment, outermost first
    compiled: Vec<Regex>,
}

impl NamePattern {
    /// Compile every segment of `pattern`
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::InvalidPattern`] for the first segment
    /// that is not a valid regular expression
    pub fn new(pattern: &QualifiedName) -> Result<Self> {
        let compiled = pattern
            .segments()
            .map(compile_anchored)
            .collect::<Result<Vec<_>>>()?;
        debug!(pattern = %pattern, segments = compiled.len(), "compiled name pattern");
        Ok(Self {
            source: pattern.clone(),
            compiled,
        })
    }

    /// The pattern as written
    #[inline]
    #[must_use]
    pub fn as_name(&self) -> &QualifiedName {
        &self.source
    }

    /// Number of segment expressions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Check if the pattern has no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Check `name` against this pattern
    ///
    /// With `match_all` unset, a pattern shorter than `name` matches its
    /// trailing segments.
    #[must_use]
    pub fn matches(&self, name: &QualifiedName, match_all: bool) -> bool {
        let mut expressions = self.compiled.iter().rev();
        name.matches(
            &self.source,
            |segment, _| expressions.next().is_some_and(|re| re.is_match(segment)),
            match_all,
        )
    }
}

/// Compile `segment` so that it only matches a whole segment
///
/// The expression is validated on its own first. Otherwise unbalanced
/// groups such as `a)|(?:b` could close the anchoring group early.
fn compile_anchored(segment: &str) -> Result<Regex> {
    let invalid = |source| QualifiedNameError::InvalidPattern {
        pattern: segment.to_owned(),
        source,
    };
    Regex::new(segment).map_err(invalid)?;
    Regex::new(&format!(r"\A(?:{segment})\z")).map_err(invalid)
}

impl QualifiedName {
    /// Match against a name of regular expressions
    ///
    /// # Errors
    /// Returns [`QualifiedNameError::InvalidPattern`] if a pattern segment
    /// does not compile
    pub fn pattern_matches(&self, pattern: &QualifiedName, match_all: bool) -> Result<bool> {
        Ok(NamePattern::new(pattern)?.matches(self, match_all))
    }
}
