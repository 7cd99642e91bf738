//! 404 (noroute) provider

use crate::config::Channel;
use crate::error::Result;
use crate::provider::{ProviderResult, ResolveContext, RobotsProvider};

const SOURCE: &str = "noroute";
const DEFAULT_SORT_ORDER: i32 = 20;

/// Priority for 404 pages, above URL-pattern rules
pub const NOROUTE_PRIORITY: i32 = 5000;

/// Forces directives on requests the router resolved to the 404 handler
///
/// On the header channel, an empty header-specific set falls back to the
/// meta-channel set so the two outputs stay consistent when only one is
/// configured.
#[derive(Debug, Clone)]
pub struct NoRouteProvider {
    channel: Channel,
    sort_order: i32,
    priority: i32,
}

impl NoRouteProvider {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            sort_order: DEFAULT_SORT_ORDER,
            priority: NOROUTE_PRIORITY,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl RobotsProvider for NoRouteProvider {
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<ProviderResult>> {
        if !ctx.request.is_noroute() {
            return Ok(None);
        }

        let mut directives = ctx.config.noroute_directives(self.channel);

        if directives.is_empty() && self.channel == Channel::Header {
            directives = ctx.config.noroute_directives(Channel::Meta);
        }

        if directives.is_empty() {
            return Ok(None);
        }

        Ok(Some(ProviderResult::new(directives, self.priority, SOURCE)))
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticConfig;
    use crate::directive::DirectiveSet;
    use crate::pattern::GlobMatcher;
    use crate::request::{RequestContext, NOROUTE_CONTROLLER};

    fn noroute_request() -> RequestContext {
        RequestContext::new("cms", NOROUTE_CONTROLLER, "index")
    }

    fn resolve(
        provider: &NoRouteProvider,
        config: &StaticConfig,
        request: &RequestContext,
    ) -> Option<ProviderResult> {
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(request, config, &matcher);
        provider.resolve(&ctx).unwrap()
    }

    #[test]
    fn test_not_applicable_off_the_404_handler() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Meta, DirectiveSet::from_values(["noindex"]));
        let provider = NoRouteProvider::new(Channel::Meta);
        let request = RequestContext::new("catalog", "product", "view");

        assert_eq!(resolve(&provider, &config, &request), None);
    }

    #[test]
    fn test_configured_set_applies_at_noroute_priority() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Meta, DirectiveSet::from_values(["noindex"]));
        let provider = NoRouteProvider::new(Channel::Meta);

        let result = resolve(&provider, &config, &noroute_request()).unwrap();
        assert_eq!(result.priority, NOROUTE_PRIORITY);
        assert_eq!(result.source, "noroute");
        assert_eq!(result.directives, DirectiveSet::from_values(["noindex"]));
    }

    #[test]
    fn test_empty_set_is_not_applicable() {
        let provider = NoRouteProvider::new(Channel::Meta);
        assert_eq!(resolve(&provider, &StaticConfig::new(), &noroute_request()), None);
    }

    #[test]
    fn test_header_channel_falls_back_to_meta_set() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Meta, DirectiveSet::from_values(["noindex"]));
        let provider = NoRouteProvider::new(Channel::Header);

        let result = resolve(&provider, &config, &noroute_request()).unwrap();
        assert_eq!(result.directives, DirectiveSet::from_values(["noindex"]));
    }

    #[test]
    fn test_header_channel_prefers_its_own_set() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Meta, DirectiveSet::from_values(["noindex"]))
            .with_noroute(Channel::Header, DirectiveSet::from_values(["none"]));
        let provider = NoRouteProvider::new(Channel::Header);

        let result = resolve(&provider, &config, &noroute_request()).unwrap();
        assert_eq!(result.directives, DirectiveSet::from_values(["none"]));
    }
}
