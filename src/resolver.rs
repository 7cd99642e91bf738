//! The resolution core
//!
//! The resolver fans a request out to every registered provider and fans
//! the contributions back in by priority. Evaluation order (sort order) and
//! winning order (priority) are deliberately decoupled: new providers can
//! be registered without renegotiating execution sequencing, because the
//! outcome depends on priority alone — sort order only breaks ties.

use crate::config::Channel;
use crate::directive::DirectiveSet;
use crate::error::Result;
use crate::provider::{
    HttpsProvider, NoRouteProvider, PaginationProvider, ProviderResult, ResolveContext,
    RobotsProvider, UrlPatternProvider,
};

/// The winning directive set with its provenance
///
/// Constructed fresh per request cycle and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub directives: DirectiveSet,
    pub priority: i32,
    /// Name of the provider that produced the winner
    pub source: &'static str,
}

impl From<ProviderResult> for Resolution {
    fn from(result: ProviderResult) -> Self {
        Self {
            directives: result.directives,
            priority: result.priority,
            source: result.source,
        }
    }
}

/// Priority-based conflict resolution over an ordered provider collection
pub struct Resolver {
    providers: Vec<Box<dyn RobotsProvider>>,
}

impl Resolver {
    /// Build a resolver over the given providers
    ///
    /// Providers are sorted by sort order ascending; the sort is stable, so
    /// providers sharing a sort order keep their registration order.
    pub fn new(mut providers: Vec<Box<dyn RobotsProvider>>) -> Self {
        providers.sort_by_key(|p| p.sort_order());
        Self { providers }
    }

    /// The built-in provider collection for one channel
    pub fn for_channel(channel: Channel) -> Self {
        Self::new(vec![
            Box::new(HttpsProvider::new(channel)),
            Box::new(UrlPatternProvider::new(channel)),
            Box::new(NoRouteProvider::new(channel)),
            Box::new(PaginationProvider::new(channel)),
        ])
    }

    /// Built-ins for the meta-robots tag
    pub fn meta() -> Self {
        Self::for_channel(Channel::Meta)
    }

    /// Built-ins for the X-Robots-Tag header
    pub fn header() -> Self {
        Self::for_channel(Channel::Header)
    }

    /// Register an additional provider
    pub fn register(&mut self, provider: Box<dyn RobotsProvider>) {
        self.providers.push(provider);
        // Stable: the new provider lands after existing ones at its order
        self.providers.sort_by_key(|p| p.sort_order());
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Evaluate every provider and select the winner by priority
    ///
    /// All providers run exactly once, in sort order, with no
    /// short-circuiting. The running winner is replaced only on a strictly
    /// greater priority, so among equal priorities the earliest-evaluated
    /// provider wins. `Ok(None)` means no provider had an opinion.
    pub fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<Resolution>> {
        let mut winner: Option<Resolution> = None;

        for provider in &self.providers {
            let Some(candidate) = provider.resolve(ctx)? else {
                continue;
            };

            let replaces = winner
                .as_ref()
                .map_or(true, |current| candidate.priority > current.priority);

            if replaces {
                tracing::debug!(
                    source = candidate.source,
                    priority = candidate.priority,
                    "robots candidate leads"
                );
                winner = Some(candidate.into());
            }
        }

        Ok(winner)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("providers", &self.providers.len())
            .finish()
    }
}
