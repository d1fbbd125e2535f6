//! Navigation into nested key-value documents
//!
//! A qualified name doubles as a key path: `server.http.port` walks the
//! `server` mapping, then `http`, then reads `port`. Any document type can take
//! part by implementing [`Navigable`]; JSON, YAML and TOML values do out of the
//! box.

use tracing::debug;

use crate::name::QualifiedName;

/// A value that may be a string-keyed mapping of further values
pub trait Navigable {
    /// Value stored under `key`
    ///
    /// `None` when the key is missing or `self` is not a mapping.
    fn child(&self, key: &str) -> Option<&Self>;
}

impl Navigable for serde_json::Value {
    #[inline]
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }
}

impl Navigable for serde_yaml::Value {
    #[inline]
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?.get(key)
    }
}

impl Navigable for toml::Value {
    #[inline]
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_table()?.get(key)
    }
}

impl QualifiedName {
    /// Look this name up in a nested document
    ///
    /// Walks the segments outermost first. A missing key, or a value that is
    /// not a mapping where one is needed, yields `None`; so does the empty
    /// name, which names no value.
    ///
    /// # Examples
    /// ```
    /// use qname::QualifiedName;
    /// use serde_json::json;
    ///
    /// let config = json!({"server": {"http": {"port": 8080}}});
    /// let port = QualifiedName::of_all(["server", "http", "port"]).resolve(&config);
    /// assert_eq!(port, Some(&json!(8080)));
    /// ```
    pub fn resolve<'a, N>(&self, root: &'a N) -> Option<&'a N>
    where
        N: Navigable + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        let mut current = root;
        for (depth, segment) in self.segments().enumerate() {
            match current.child(segment) {
                Some(next) => current = next,
                None => {
                    debug!(name = %self, depth, segment, "qualified name did not resolve");
                    return None;
                }
            }
        }
        Some(current)
    }
}
