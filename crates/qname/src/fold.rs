//! Accumulation over the chain
//!
//! Two folds, since the chain links leaf to root but callers often need
//! root-first order:
//! - *outward* folds visit the outermost segment first
//! - *inward* folds visit the innermost (last) segment first
//!
//! Both are loops over the chain, never recursive.

use crate::name::QualifiedName;

impl QualifiedName {
    /// Fold segments root-first
    ///
    /// # Examples
    /// ```
    /// use qname::QualifiedName;
    ///
    /// let name = QualifiedName::of_all(["a", "b", "c"]);
    /// let path = name.fold_outward(String::new(), |acc, segment| acc + "/" + segment);
    /// assert_eq!(path, "/a/b/c");
    /// ```
    pub fn fold_outward<T, F>(&self, init: T, combine: F) -> T
    where
        F: FnMut(T, &str) -> T,
    {
        self.fold_outward_while(init, combine, |_| true)
    }

    /// Fold segments root-first while `proceed` holds
    ///
    /// `proceed` sees the accumulator before each segment is combined. Once it
    /// returns `false` the accumulator is returned without combining that
    /// segment or any later one.
    pub fn fold_outward_while<T, F, P>(&self, init: T, mut combine: F, mut proceed: P) -> T
    where
        F: FnMut(T, &str) -> T,
        P: FnMut(&T) -> bool,
    {
        let mut acc = init;
        for segment in self.segments() {
            if !proceed(&acc) {
                break;
            }
            acc = combine(acc, segment);
        }
        acc
    }

    /// Fold segments leaf-first
    pub fn fold_inward<T, F>(&self, init: T, combine: F) -> T
    where
        F: FnMut(T, &str) -> T,
    {
        self.fold_inward_while(init, combine, |_, _| true)
    }

    /// Fold segments leaf-first while `proceed` holds
    ///
    /// `proceed` sees the accumulator and the segment about to be combined.
    /// Once it returns `false` the walk stops; the enclosing segments are not
    /// visited.
    pub fn fold_inward_while<T, F, P>(&self, init: T, mut combine: F, mut proceed: P) -> T
    where
        F: FnMut(T, &str) -> T,
        P: FnMut(&T, &str) -> bool,
    {
        let mut acc = init;
        for segment in self.segments_rev() {
            if !proceed(&acc, segment) {
                break;
            }
            acc = combine(acc, segment);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(acc: Vec<String>, segment: &str) -> Vec<String> {
        let mut acc = acc;
        acc.push(segment.to_owned());
        acc
    }

    #[test]
    fn outward_is_root_first() {
        let name = QualifiedName::of_all(["a", "b", "c"]);
        assert_eq!(name.fold_outward(Vec::new(), collect), vec!["a", "b", "c"]);
    }

    #[test]
    fn inward_is_leaf_first() {
        let name = QualifiedName::of_all(["a", "b", "c"]);
        assert_eq!(name.fold_inward(Vec::new(), collect), vec!["c", "b", "a"]);
    }

    #[test]
    fn empty_returns_initial() {
        let empty = QualifiedName::empty();
        assert_eq!(empty.fold_outward(7, |acc, _| acc + 1), 7);
        assert_eq!(empty.fold_inward(7, |acc, _| acc + 1), 7);
    }

    #[test]
    fn outward_stops_when_accumulator_fails_check() {
        let name = QualifiedName::of_all(["a", "b", "c", "d"]);
        let taken = name.fold_outward_while(Vec::new(), collect, |acc| acc.len() < 2);
        assert_eq!(taken, vec!["a", "b"]);
    }

    #[test]
    fn inward_stops_before_failing_segment() {
        let name = QualifiedName::of_all(["a", "b", "c", "d"]);
        let taken = name.fold_inward_while(Vec::new(), collect, |_, segment| segment != "b");
        assert_eq!(taken, vec!["d", "c"]);
    }

    #[test]
    fn deep_fold_is_iterative() {
        let name = QualifiedName::of_all((0..100_000).map(|_| "x"));
        assert_eq!(name.fold_outward(0usize, |acc, s| acc + s.len()), 100_000);
        assert_eq!(name.fold_inward(0usize, |acc, s| acc + s.len()), 100_000);
    }
}
