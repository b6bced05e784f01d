use std::path::Path;

/// A pattern-search primitive run against a scan target.
///
/// Implementations return whatever text the search produced, diagnostics
/// included. Failures are folded into that text rather than returned as
/// errors so one broken search never aborts its siblings.
pub trait Searcher: Send + Sync {
    fn search(&self, pattern: &str, target: &Path, excludes: &[String]) -> String;
}

impl<S: Searcher + ?Sized> Searcher for &S {
    fn search(&self, pattern: &str, target: &Path, excludes: &[String]) -> String {
        (**self).search(pattern, target, excludes)
    }
}
