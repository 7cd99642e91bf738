//! Pattern matching collaborator
//!
//! Rules target routes and URLs with glob-style patterns (`catalog_product_*`,
//! `*product.html`). The trait exists so hosts can substitute their own
//! matcher; the default is backed by the `glob` crate.

/// Decides whether a subject string matches a glob-style pattern
pub trait PatternMatcher {
    fn matches(&self, subject: &str, pattern: &str) -> bool;
}

/// Default matcher backed by [`glob::Pattern`]
///
/// `*` matches any character sequence, including `/`, so URL patterns like
/// `*product.html` behave as rule authors expect. An invalid pattern never
/// matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl GlobMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for GlobMatcher {
    fn matches(&self, subject: &str, pattern: &str) -> bool {
        match glob::Pattern::new(pattern) {
            Ok(compiled) => compiled.matches(subject),
            Err(_) => false,
        }
    }
}
