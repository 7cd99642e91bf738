//! # Robots Resolver
//!
//! A priority-based resolution engine that decides, per web request, which
//! robots directives (`noindex`, `nofollow`, ...) to emit — as the page's
//! meta-robots tag and as the `X-Robots-Tag` HTTP header.
//!
//! Candidate directive sets come from independent, pluggable providers:
//!
//! - **URL-pattern rules**: configured glob patterns matched against the
//!   route's full action name or the base URL
//! - **Pagination**: paginated listing pages, with and without filters
//! - **NoRoute**: forced directives on 404 pages
//! - **HTTPS**: blanket directives for secure connections
//!
//! Every provider is evaluated on every request; the winner is the
//! contribution with the highest priority, independent of evaluation
//! order. Hosts register custom providers through the same
//! [`RobotsProvider`] contract.
//!
//! ## Example
//!
//! ```rust
//! use robots_resolver::{
//!     Channel, DirectivePayload, GlobMatcher, MetaRobotsApplier, PageMeta, PageSink,
//!     RequestContext, ResolveContext, ResponseHead, Rule, StaticConfig, XRobotsApplier,
//! };
//!
//! // Configuration would normally come from the host application
//! let config = StaticConfig::new().with_rule(
//!     Channel::Meta,
//!     Rule::new(
//!         "catalog_product_*",
//!         DirectivePayload::Legacy(vec!["noindex".into(), "nofollow".into()]),
//!     ),
//! );
//!
//! // Snapshot of the inbound request
//! let request = RequestContext::new("catalog", "product", "view")
//!     .with_current_url("https://example.com/shoes.html")
//!     .with_base_url("https://example.com/shoes.html");
//!
//! let matcher = GlobMatcher::new();
//! let ctx = ResolveContext::new(&request, &config, &matcher);
//!
//! // Page render: write the meta-robots value
//! let mut page = PageMeta::new();
//! MetaRobotsApplier::new().apply(&ctx, &mut page).unwrap();
//! assert_eq!(page.robots(), Some("NOINDEX, NOFOLLOW"));
//!
//! // Response finalization: set the header, reusing the meta value
//! // because no header-channel rule is configured
//! let mut response = ResponseHead::new();
//! XRobotsApplier::new().apply(&ctx, &page, &mut response);
//! assert_eq!(response.header("X-Robots-Tag"), Some("NOINDEX, NOFOLLOW"));
//! ```

pub mod apply;
pub mod config;
pub mod directive;
pub mod error;
pub mod gating;
pub mod pattern;
pub mod provider;
pub mod request;
pub mod resolver;
pub mod rule;

// Re-export main types
pub use apply::{
    MetaRobotsApplier, PageMeta, PageSink, ResponseHead, ResponseSink, XRobotsApplier,
    X_ROBOTS_HEADER,
};
pub use config::{Channel, ChannelSettings, RobotsConfig, StaticConfig};
pub use directive::{Directive, DirectivePayload, DirectiveSet};
pub use error::{Result, RobotsError};
pub use pattern::{GlobMatcher, PatternMatcher};
pub use provider::{
    HttpsProvider, NoRouteProvider, PaginationProvider, ProviderResult, ResolveContext,
    RobotsProvider, UrlPatternProvider,
};
pub use request::{RequestContext, NOROUTE_CONTROLLER, PAGE_PARAM};
pub use resolver::{Resolution, Resolver};
pub use rule::{Rule, DEFAULT_RULE_PRIORITY};

// Built-in priority constants, for custom provider authors
pub use provider::{HTTPS_PRIORITY, NOROUTE_PRIORITY, PAGINATION_PRIORITY};
