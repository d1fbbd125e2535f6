//! Segment-wise transformation

use crate::name::QualifiedName;

impl QualifiedName {
    /// Replace every segment with the transformer's output
    ///
    /// Segments are transformed root-first. The first error stops the walk and
    /// is returned exactly as the transformer produced it.
    ///
    /// # Errors
    /// Returns the transformer's error
    ///
    /// # Examples
    /// ```
    /// use qname::QualifiedName;
    ///
    /// let name = QualifiedName::of_all(["8080", "443"]);
    /// let ports = name.transform(|s| s.parse::<u16>().map(|p| (p + 1).to_string()));
    /// assert_eq!(ports.unwrap(), QualifiedName::of_all(["8081", "444"]));
    ///
    /// let broken = QualifiedName::of_all(["80", "http"]);
    /// assert!(broken.transform(|s| s.parse::<u16>().map(|p| p.to_string())).is_err());
    /// ```
    pub fn transform<S, E, F>(&self, mut transformer: F) -> Result<QualifiedName, E>
    where
        S: Into<String>,
        F: FnMut(&str) -> Result<S, E>,
    {
        self.segments()
            .try_fold(QualifiedName::empty(), |acc, segment| {
                Ok(acc.add(transformer(segment)?))
            })
    }

    /// Replace every segment with `f(segment)`
    #[must_use]
    pub fn map_segments<S, F>(&self, mut f: F) -> QualifiedName
    where
        S: Into<String>,
        F: FnMut(&str) -> S,
    {
        self.fold_outward(QualifiedName::empty(), |acc, segment| acc.add(f(segment)))
    }
}
