//! Textual form of qualified names
//!
//! A [`NameFormat`] pairs a separator with an escape token. Joining escapes
//! every segment character that could be mistaken for the start of either
//! token, so parsing the joined text gives back the same segments for any
//! content, including segments that contain the separator or the escape.
//!
//! Unescape rule: the escape token followed by the first character of the
//! separator or of the escape token stands for that character. An escape
//! token before anything else, or at the very end of the text, is literal.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::mem;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::FormatError;
use crate::name::QualifiedName;

/// Text shown for the empty name by [`Display`]
pub const EMPTY_NAME_MARKER: &str = "{}";

/// Separator and escape token used to join and parse names
///
/// Both tokens are non-empty and start with different characters; the
/// constructors enforce this, so joining and parsing never fail.
///
/// # Examples
/// ```
/// use qname::{NameFormat, QualifiedName};
///
/// let slashed = NameFormat::default().with_separator("/").unwrap();
/// let name = QualifiedName::of_all(["usr", "local/bin"]);
/// let text = name.join(&slashed);
/// assert_eq!(text, r"usr/local\/bin");
/// assert_eq!(QualifiedName::parse(&text, &slashed), name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NameFormatConfig")]
pub struct NameFormat {
    separator: Cow<'static, str>,
    escape: Cow<'static, str>,
}

/// Unvalidated form read from configuration files
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NameFormatConfig {
    separator: String,
    escape: String,
}

impl Default for NameFormatConfig {
    fn default() -> Self {
        Self {
            separator: NameFormat::DEFAULT_SEPARATOR.to_owned(),
            escape: NameFormat::DEFAULT_ESCAPE.to_owned(),
        }
    }
}

impl TryFrom<NameFormatConfig> for NameFormat {
    type Error = FormatError;

    fn try_from(config: NameFormatConfig) -> Result<Self, Self::Error> {
        Self::new(config.separator, config.escape)
    }
}

impl NameFormat {
    /// Default separator
    pub const DEFAULT_SEPARATOR: &'static str = ".";

    /// Default escape token
    pub const DEFAULT_ESCAPE: &'static str = "\\";

    /// Dotted notation with backslash escapes (the default)
    pub const DOTTED: Self = Self {
        separator: Cow::Borrowed(Self::DEFAULT_SEPARATOR),
        escape: Cow::Borrowed(Self::DEFAULT_ESCAPE),
    };

    /// Create a format from explicit tokens
    ///
    /// # Errors
    /// Returns error if either token is empty or both start with the same
    /// character
    pub fn new(
        separator: impl Into<Cow<'static, str>>,
        escape: impl Into<Cow<'static, str>>,
    ) -> Result<Self, FormatError> {
        let separator = separator.into();
        let escape = escape.into();
        let (Some(sep_head), Some(esc_head)) = (separator.chars().next(), escape.chars().next()) else {
            return Err(if separator.is_empty() {
                FormatError::EmptySeparator
            } else {
                FormatError::EmptyEscape
            });
        };
        if sep_head == esc_head {
            return Err(FormatError::AmbiguousTokens {
                separator: separator.into_owned(),
                escape: escape.into_owned(),
            });
        }
        Ok(Self { separator, escape })
    }

    /// Replace the separator, keeping the escape token
    ///
    /// # Errors
    /// Returns error if the new pair is invalid (see [`NameFormat::new`])
    pub fn with_separator(self, separator: impl Into<Cow<'static, str>>) -> Result<Self, FormatError> {
        Self::new(separator, self.escape)
    }

    /// Replace the escape token, keeping the separator
    ///
    /// # Errors
    /// Returns error if the new pair is invalid (see [`NameFormat::new`])
    pub fn with_escape(self, escape: impl Into<Cow<'static, str>>) -> Result<Self, FormatError> {
        Self::new(self.separator, escape)
    }

    /// Separator token
    #[inline]
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Escape token
    #[inline]
    #[must_use]
    pub fn escape(&self) -> &str {
        &self.escape
    }

    /// Characters that must be escaped inside a segment
    #[inline]
    fn is_reserved(&self, c: char) -> bool {
        self.separator.starts_with(c) || self.escape.starts_with(c)
    }

    /// Append `segment` to `out` with reserved characters escaped
    fn escape_into(&self, segment: &str, out: &mut String) {
        for c in segment.chars() {
            if self.is_reserved(c) {
                out.push_str(&self.escape);
            }
            out.push(c);
        }
    }

    /// Escape a single segment
    #[must_use]
    pub fn escape_segment(&self, segment: &str) -> String {
        let mut out = String::with_capacity(segment.len());
        self.escape_into(segment, &mut out);
        out
    }

    /// Split `text` on unescaped separators, unescaping each fragment
    ///
    /// Empty fragments (leading, trailing or doubled separators) are dropped.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut fragments = Vec::new();
        let mut fragment = String::new();
        let mut dropped = 0usize;
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix(self.escape()) {
                match after.chars().next() {
                    Some(next) if self.is_reserved(next) => {
                        fragment.push(next);
                        rest = &after[next.len_utf8()..];
                    }
                    _ => {
                        fragment.push_str(self.escape());
                        rest = after;
                    }
                }
            } else if let Some(after) = rest.strip_prefix(self.separator()) {
                if fragment.is_empty() {
                    dropped += 1;
                } else {
                    fragments.push(mem::take(&mut fragment));
                }
                rest = after;
            } else {
                fragment.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        if fragment.is_empty() {
            dropped += 1;
        } else {
            fragments.push(fragment);
        }

        trace!(
            separator = %self.separator,
            kept = fragments.len(),
            dropped,
            "split qualified name text"
        );
        fragments
    }
}

impl Default for NameFormat {
    fn default() -> Self {
        Self::DOTTED
    }
}

impl QualifiedName {
    /// Join segments with the separator, escaping each segment
    ///
    /// The empty name joins to `""`.
    #[must_use]
    pub fn join(&self, format: &NameFormat) -> String {
        let mut first = true;
        self.fold_outward(String::new(), |mut out, segment| {
            if !first {
                out.push_str(format.separator());
            }
            first = false;
            format.escape_into(segment, &mut out);
            out
        })
    }

    /// Parse text produced by [`QualifiedName::join`]
    ///
    /// Never fails: empty fragments are dropped and stray escape tokens are
    /// kept as literal text.
    #[must_use]
    pub fn parse(text: &str, format: &NameFormat) -> Self {
        Self::empty().add_parsed(text, format)
    }

    /// Append the segments parsed from `text`
    #[must_use]
    pub fn add_parsed(&self, text: &str, format: &NameFormat) -> Self {
        self.add_all(format.split(text))
    }
}

/// Dotted notation, or `{}` for the empty name
///
/// The single-segment name `["{}"]` prints the same `{}` and parses back as
/// the empty name. Use [`QualifiedName::join`] when that segment can occur.
impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str(EMPTY_NAME_MARKER)
        } else {
            f.write_str(&self.join(&NameFormat::DOTTED))
        }
    }
}

/// Parses dotted notation; the empty-name marker `{}` parses to the empty name
impl FromStr for QualifiedName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EMPTY_NAME_MARKER {
            return Ok(Self::empty());
        }
        Ok(Self::parse(s, &NameFormat::DOTTED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slashed() -> NameFormat {
        NameFormat::default().with_separator("/").unwrap()
    }

    #[test]
    fn marker_segment_displays_like_empty_name() {
        let marker = QualifiedName::of(EMPTY_NAME_MARKER);
        assert_eq!(marker.to_string(), QualifiedName::empty().to_string());
        assert_eq!(marker.to_string().parse::<QualifiedName>().unwrap(), QualifiedName::empty());
        let joined = marker.join(&NameFormat::DOTTED);
        assert_eq!(QualifiedName::parse(&joined, &NameFormat::DOTTED), marker);
    }

    fn abc() -> QualifiedName {
        QualifiedName::of_all(["a", "b", "c"])
    }

    #[test]
    fn dotted_display() {
        assert_eq!(QualifiedName::of("a").add("b").add("c").to_string(), "a.b.c");
    }

    #[test]
    fn empty_display_marker() {
        assert_eq!(QualifiedName::empty().to_string(), "{}");
    }

    #[test]
    fn join_with_separator() {
        assert_eq!(abc().join(&slashed()), "a/b/c");
        assert_eq!(QualifiedName::empty().join(&slashed()), "");
    }

    #[test]
    fn join_escapes_separator_and_escape() {
        let name = QualifiedName::of_all(["a.b", r"c\d"]);
        assert_eq!(name.join(&NameFormat::DOTTED), r"a\.b.c\\d");
    }

    #[test]
    fn parse_drops_empty_fragments() {
        let format = slashed();
        assert_eq!(QualifiedName::parse("a/b/c", &format), abc());
        assert_eq!(QualifiedName::parse("/a/b/c", &format), abc());
        assert_eq!(QualifiedName::parse("/a/b/c/", &format), abc());
        assert_eq!(QualifiedName::parse("a//b/c", &format), abc());
        assert_eq!(QualifiedName::parse("///", &format), QualifiedName::empty());
        assert_eq!(QualifiedName::parse("", &format), QualifiedName::empty());
    }

    #[test]
    fn parse_honours_escaped_separator() {
        let name = QualifiedName::parse(r"a\.b.c", &NameFormat::DOTTED);
        assert_eq!(name, QualifiedName::of_all(["a.b", "c"]));
    }

    #[test]
    fn parse_escaped_escape_before_separator_splits() {
        let name = QualifiedName::parse(r"a\\.b", &NameFormat::DOTTED);
        assert_eq!(name, QualifiedName::of_all([r"a\", "b"]));
    }

    #[test]
    fn lone_trailing_escape_is_literal() {
        let name = QualifiedName::parse(r"a.b\", &NameFormat::DOTTED);
        assert_eq!(name, QualifiedName::of_all(["a", r"b\"]));
    }

    #[test]
    fn escape_before_plain_character_is_literal() {
        let name = QualifiedName::parse(r"dir\name.x", &NameFormat::DOTTED);
        assert_eq!(name, QualifiedName::of_all([r"dir\name", "x"]));
    }

    #[test]
    fn multi_character_separator_round_trips() {
        let format = NameFormat::new("::", "\\").unwrap();
        let name = QualifiedName::of_all(["std:", ":collections", "a::b"]);
        let text = name.join(&format);
        assert_eq!(QualifiedName::parse(&text, &format), name);
    }

    #[test]
    fn add_parsed_extends_prefix() {
        let base = QualifiedName::of("root");
        let name = base.add_parsed("a.b", &NameFormat::DOTTED);
        assert_eq!(name, QualifiedName::of_all(["root", "a", "b"]));
    }

    #[test]
    fn from_str_uses_dotted_format() {
        let name: QualifiedName = "a.b.c".parse().unwrap();
        assert_eq!(name, abc());
        let empty: QualifiedName = "{}".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn format_validation() {
        assert_eq!(NameFormat::new("", "\\"), Err(FormatError::EmptySeparator));
        assert_eq!(NameFormat::new(".", ""), Err(FormatError::EmptyEscape));
        assert!(matches!(
            NameFormat::new("::", ":"),
            Err(FormatError::AmbiguousTokens { .. })
        ));
        assert!(NameFormat::new("->", "%").is_ok());
    }

    #[test]
    fn format_from_config_documents() {
        let json: NameFormat = serde_json::from_str(r#"{"separator": "/"}"#).unwrap();
        assert_eq!(json.separator(), "/");
        assert_eq!(json.escape(), "\\");

        let yaml: NameFormat = serde_yaml::from_str("separator: '::'\nescape: '%'\n").unwrap();
        assert_eq!(yaml, NameFormat::new("::", "%").unwrap());

        let from_toml: NameFormat = toml::from_str("separator = \"|\"").unwrap();
        assert_eq!(from_toml.separator(), "|");

        let invalid = serde_json::from_str::<NameFormat>(r#"{"separator": "\\"}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn format_serializes_tokens() {
        let json = serde_json::to_string(&NameFormat::DOTTED).unwrap();
        assert_eq!(json, r#"{"separator":".","escape":"\\"}"#);
    }
}
