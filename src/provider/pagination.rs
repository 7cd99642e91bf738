//! Pagination provider

use crate::config::Channel;
use crate::error::Result;
use crate::provider::{ProviderResult, ResolveContext, RobotsProvider};
use crate::request::PAGE_PARAM;

const SOURCE: &str = "pagination";
const DEFAULT_SORT_ORDER: i32 = 30;

/// Priority for paginated pages, above content-type-specific sources
pub const PAGINATION_PRIORITY: i32 = 10000;

/// Decides directives for paginated listing pages
///
/// Presence of the page parameter alone triggers evaluation — `?p=1` is
/// treated the same as deeper pages. When `p` is the only query parameter
/// the pagination-only configuration applies; any additional parameter
/// selects the pagination-plus-filters configuration instead. Each branch
/// is gated by its own feature flag.
///
/// On the header channel, an empty header-specific set falls back to the
/// meta set when the corresponding meta flag is on. A disabled flag on the
/// provider's own channel disables the branch entirely, fallback included.
#[derive(Debug, Clone)]
pub struct PaginationProvider {
    channel: Channel,
    sort_order: i32,
    priority: i32,
}

impl PaginationProvider {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            sort_order: DEFAULT_SORT_ORDER,
            priority: PAGINATION_PRIORITY,
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

    fn branch_enabled(&self, ctx: &ResolveContext<'_>, channel: Channel, filtered: bool) -> bool {
        if filtered {
            ctx.config.is_paginated_filtered_enabled(channel)
        } else {
            ctx.config.is_paginated_enabled(channel)
        }
    }

    fn branch_directives(
        &self,
        ctx: &ResolveContext<'_>,
        channel: Channel,
        filtered: bool,
    ) -> crate::directive::DirectiveSet {
        if filtered {
            ctx.config.paginated_filtered_directives(channel)
        } else {
            ctx.config.paginated_directives(channel)
        }
    }

    /// Configured set for one branch, gated by this channel's own flag
    ///
    /// The flag check comes first: a disabled branch never falls back. Only
    /// when the branch is on and its own set is empty does the header
    /// channel consult the meta flag and set.
    fn configured_set(
        &self,
        ctx: &ResolveContext<'_>,
        filtered: bool,
    ) -> Option<crate::directive::DirectiveSet> {
        if !self.branch_enabled(ctx, self.channel, filtered) {
            return None;
        }

        let set = self.branch_directives(ctx, self.channel, filtered);
        if !set.is_empty() {
            return Some(set);
        }

        if self.channel != Channel::Header {
            return None;
        }

        if !self.branch_enabled(ctx, Channel::Meta, filtered) {
            return None;
        }

        let fallback = self.branch_directives(ctx, Channel::Meta, filtered);
        (!fallback.is_empty()).then_some(fallback)
    }
}

impl RobotsProvider for PaginationProvider {
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<ProviderResult>> {
        let query = &ctx.request.query;

        if !query.contains_key(PAGE_PARAM) {
            return Ok(None);
        }

        let filtered = query.len() > 1;

        Ok(self
            .configured_set(ctx, filtered)
            .map(|set| ProviderResult::new(set, self.priority, SOURCE)))
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
