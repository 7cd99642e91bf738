//! Entry points: the meta-robots and X-Robots-Tag appliers
//!
//! The meta applier runs once per page render and writes the winning
//! directive string into the page's meta-robots slot; its errors surface to
//! the host's normal request-error handling. The header applier runs once
//! per outgoing response, writes the `X-Robots-Tag` header, and swallows
//! every failure after logging it — a robots bug must never abort response
//! delivery.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::gating;
use crate::provider::ResolveContext;
use crate::resolver::Resolver;

/// Header written by the X-Robots applier
pub const X_ROBOTS_HEADER: &str = "X-Robots-Tag";

/// Write-only slot for the page's meta-robots value
///
/// The readback exists so the header path can reuse whatever the meta path
/// already decided for this request.
pub trait PageSink {
    fn set_robots(&mut self, value: &str);
    fn robots(&self) -> Option<&str>;
}

/// Trivial in-memory page sink
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    robots: Option<String>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSink for PageMeta {
    fn set_robots(&mut self, value: &str) {
        self.robots = Some(value.to_string());
    }

    fn robots(&self) -> Option<&str> {
        self.robots.as_deref()
    }
}

/// Write-only facade over the outgoing HTTP response
pub trait ResponseSink {
    fn is_redirect(&self) -> bool;
    /// Set a header, overwriting any existing value of that name
    fn set_header(&mut self, name: &str, value: &str);
}

/// In-memory response head for tests and simple wiring
#[derive(Debug, Clone, Default)]
pub struct ResponseHead {
    redirect: bool,
    headers: BTreeMap<String, String>,
}

impl ResponseHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = redirect;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

impl ResponseSink for ResponseHead {
    fn is_redirect(&self) -> bool {
        self.redirect
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }
}

/// Applies the winning directive set to the page's meta-robots slot
#[derive(Debug)]
pub struct MetaRobotsApplier {
    resolver: Resolver,
}

impl MetaRobotsApplier {
    /// Applier over the built-in meta provider collection
    pub fn new() -> Self {
        Self {
            resolver: Resolver::meta(),
        }
    }

    /// Applier over a custom resolver (extra providers registered)
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver_mut(&mut self) -> &mut Resolver {
        &mut self.resolver
    }

    /// Resolve and write the meta-robots value for one page render
    ///
    /// Gating (disabled feature, ignored URL, AJAX, ignored action) returns
    /// early with no side effects. "No winner" is a valid silent outcome;
    /// collaborator failures propagate to the caller.
    pub fn apply(&self, ctx: &ResolveContext<'_>, page: &mut dyn PageSink) -> Result<()> {
        if gating::should_skip(ctx.config, ctx.request) {
            return Ok(());
        }

        if let Some(resolution) = self.resolver.resolve(ctx)? {
            page.set_robots(&resolution.directives.render());
        }

        Ok(())
    }
}

impl Default for MetaRobotsApplier {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the winning directive set as the `X-Robots-Tag` response header
#[derive(Debug)]
pub struct XRobotsApplier {
    resolver: Resolver,
}

impl XRobotsApplier {
    /// Applier over the built-in header provider collection
    pub fn new() -> Self {
        Self {
            resolver: Resolver::header(),
        }
    }

    /// Applier over a custom resolver (extra providers registered)
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver_mut(&mut self) -> &mut Resolver {
        &mut self.resolver
    }

    /// Resolve and set the header for one outgoing response
    ///
    /// Gated only by the header feature flag, not by the meta gating rules.
    /// Redirect responses are left untouched. When no header provider has
    /// an opinion, the value the meta applier already wrote is reused so
    /// tag and header stay consistent. Failures are logged and swallowed.
    pub fn apply(
        &self,
        ctx: &ResolveContext<'_>,
        page: &dyn PageSink,
        response: &mut dyn ResponseSink,
    ) {
        if !ctx.config.is_xheader_enabled() {
            return;
        }

        if response.is_redirect() {
            return;
        }

        if let Err(error) = self.try_apply(ctx, page, response) {
            tracing::error!(%error, "failed to add X-Robots-Tag header");
        }
    }

    fn try_apply(
        &self,
        ctx: &ResolveContext<'_>,
        page: &dyn PageSink,
        response: &mut dyn ResponseSink,
    ) -> Result<()> {
        let value = match self.resolver.resolve(ctx)? {
            Some(resolution) => resolution.directives.render(),
            None => page.robots().unwrap_or_default().to_string(),
        };

        if value.is_empty() {
            return Ok(());
        }

        response.set_header(X_ROBOTS_HEADER, &value);
        Ok(())
    }
}

impl Default for XRobotsApplier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Channel, RobotsConfig, StaticConfig};
    use crate::directive::{DirectivePayload, DirectiveSet};
    use crate::error::RobotsError;
    use crate::pattern::GlobMatcher;
    use crate::provider::{ProviderResult, RobotsProvider};
    use crate::request::{RequestContext, NOROUTE_CONTROLLER};
    use crate::rule::Rule;

    fn product_view() -> RequestContext {
        RequestContext::new("catalog", "product", "view")
            .with_current_url("https://example.com/product.html")
            .with_base_url("https://example.com/product.html")
    }

    fn rule_config() -> StaticConfig {
        StaticConfig::new().with_rule(
            Channel::Meta,
            Rule::new(
                "catalog_product_*",
                DirectivePayload::Legacy(vec!["noindex".into(), "nofollow".into()]),
            ),
        )
    }

    #[test]
    fn test_meta_applier_writes_rendered_winner() {
        let config = rule_config();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let mut page = PageMeta::new();

        MetaRobotsApplier::new().apply(&ctx, &mut page).unwrap();
        assert_eq!(page.robots(), Some("NOINDEX, NOFOLLOW"));
    }

    #[test]
    fn test_meta_applier_is_silent_without_winner() {
        let config = StaticConfig::new();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let mut page = PageMeta::new();

        MetaRobotsApplier::new().apply(&ctx, &mut page).unwrap();
        assert_eq!(page.robots(), None);
    }

    #[test]
    fn test_meta_applier_respects_gating() {
        let config = rule_config().with_ignored_action("catalog_product_view");
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let mut page = PageMeta::new();

        MetaRobotsApplier::new().apply(&ctx, &mut page).unwrap();
        assert_eq!(page.robots(), None);
    }

    #[test]
    fn test_meta_applier_is_idempotent() {
        let config = rule_config();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let applier = MetaRobotsApplier::new();
        let mut page = PageMeta::new();

        applier.apply(&ctx, &mut page).unwrap();
        let first = page.robots().map(str::to_owned);
        applier.apply(&ctx, &mut page).unwrap();

        assert_eq!(page.robots().map(str::to_owned), first);
    }

    #[test]
    fn test_header_applier_sets_header_from_own_resolution() {
        let config = StaticConfig::new().with_noroute(
            Channel::Header,
            DirectiveSet::from_values(["noindex", "nofollow"]),
        );
        let request = RequestContext::new("cms", NOROUTE_CONTROLLER, "index");
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), Some("NOINDEX, NOFOLLOW"));
    }

    #[test]
    fn test_header_applier_overwrites_existing_header() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Header, DirectiveSet::from_values(["noindex"]));
        let request = RequestContext::new("cms", NOROUTE_CONTROLLER, "index");
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();
        response.set_header(X_ROBOTS_HEADER, "STALE");

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), Some("NOINDEX"));
    }

    #[test]
    fn test_header_applier_falls_back_to_page_value() {
        let config = StaticConfig::new();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let mut page = PageMeta::new();
        page.set_robots("NOINDEX, NOFOLLOW");
        let mut response = ResponseHead::new();

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), Some("NOINDEX, NOFOLLOW"));
    }

    #[test]
    fn test_header_applier_silent_when_nothing_resolved_anywhere() {
        let config = StaticConfig::new();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), None);
    }

    #[test]
    fn test_header_applier_skips_when_flag_off() {
        let config = StaticConfig::new()
            .with_header_enabled(false)
            .with_noroute(Channel::Header, DirectiveSet::from_values(["noindex"]));
        let request = RequestContext::new("cms", NOROUTE_CONTROLLER, "index");
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), None);
    }

    #[test]
    fn test_header_applier_skips_redirects() {
        let config = StaticConfig::new()
            .with_noroute(Channel::Header, DirectiveSet::from_values(["noindex"]));
        let request = RequestContext::new("cms", NOROUTE_CONTROLLER, "index");
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new().with_redirect(true);

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), None);
    }

    #[test]
    fn test_header_applier_swallows_provider_failure() {
        struct FailingProvider;

        impl RobotsProvider for FailingProvider {
            fn resolve(&self, _ctx: &ResolveContext<'_>) -> crate::error::Result<Option<ProviderResult>> {
                Err(RobotsError::provider("failing", "backend unavailable"))
            }

            fn sort_order(&self) -> i32 {
                0
            }
        }

        let config = StaticConfig::new();
        let request = product_view();
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();

        let applier =
            XRobotsApplier::with_resolver(crate::resolver::Resolver::new(vec![Box::new(
                FailingProvider,
            )]));

        // Must not panic and must leave the response deliverable
        applier.apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), None);
    }

    #[test]
    fn test_header_gating_is_independent_of_meta_gating() {
        // Meta gating (ignored action) must not stop the header path
        let config = StaticConfig::new()
            .with_ignored_action("cms_noroute_index")
            .with_noroute(Channel::Header, DirectiveSet::from_values(["noindex"]));
        let request = RequestContext::new("cms", NOROUTE_CONTROLLER, "index");
        let matcher = GlobMatcher::new();
        let ctx = ResolveContext::new(&request, &config, &matcher);
        let page = PageMeta::new();
        let mut response = ResponseHead::new();

        XRobotsApplier::new().apply(&ctx, &page, &mut response);
        assert_eq!(response.header(X_ROBOTS_HEADER), Some("NOINDEX"));
    }

    #[test]
    fn test_static_config_is_a_robots_config() {
        // The trait object path used by appliers
        let config: &dyn RobotsConfig = &StaticConfig::new();
        assert!(config.is_enabled());
    }
}
