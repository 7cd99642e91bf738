//! Directive providers
//!
//! A provider is a pluggable unit that examines the current request and may
//! contribute a directive set with a priority. The resolver evaluates every
//! registered provider and keeps the highest-priority contribution, so
//! providers never need to know about each other.
//!
//! Built-ins: [`UrlPatternProvider`], [`NoRouteProvider`],
//! [`PaginationProvider`], [`HttpsProvider`]. Each is constructed for one
//! [`Channel`](crate::config::Channel) and reads that channel's
//! configuration.

mod https;
mod noroute;
mod pagination;
mod url_pattern;

pub use https::{HttpsProvider, HTTPS_PRIORITY};
pub use noroute::{NoRouteProvider, NOROUTE_PRIORITY};
pub use pagination::{PaginationProvider, PAGINATION_PRIORITY};
pub use url_pattern::UrlPatternProvider;

use crate::config::RobotsConfig;
use crate::directive::DirectiveSet;
use crate::error::Result;
use crate::pattern::PatternMatcher;
use crate::request::RequestContext;

/// Everything a provider may consult during one evaluation
///
/// Borrowed collaborators bundled per request cycle; nothing here outlives
/// the request.
pub struct ResolveContext<'a> {
    pub request: &'a RequestContext,
    pub config: &'a dyn RobotsConfig,
    pub matcher: &'a dyn PatternMatcher,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        request: &'a RequestContext,
        config: &'a dyn RobotsConfig,
        matcher: &'a dyn PatternMatcher,
    ) -> Self {
        Self {
            request,
            config,
            matcher,
        }
    }
}

/// One provider contribution: directives plus the priority they carry
///
/// The priority travels with the directives in a single value, so a
/// provider's evaluation is one call with no state carried between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    pub directives: DirectiveSet,
    pub priority: i32,
    /// Provider name, for diagnostics
    pub source: &'static str,
}

impl ProviderResult {
    pub fn new(directives: DirectiveSet, priority: i32, source: &'static str) -> Self {
        Self {
            directives,
            priority,
            source,
        }
    }
}

/// A pluggable directive source
///
/// `resolve` returns `Ok(None)` when the provider does not apply to the
/// request — distinct from `Ok(Some)` with an empty set, which would mean
/// "explicitly no directives". Built-ins never fail; custom providers
/// backed by fallible collaborators may return an error, which the meta
/// path propagates and the header path logs and swallows.
pub trait RobotsProvider {
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<ProviderResult>>;

    /// Evaluation order among providers; lower runs first
    ///
    /// Sort order only decides ties between equal priorities — the winner
    /// is otherwise chosen by priority alone.
    fn sort_order(&self) -> i32;
}
