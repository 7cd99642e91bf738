//! HTTPS provider

use crate::config::Channel;
use crate::error::Result;
use crate::provider::{ProviderResult, ResolveContext, RobotsProvider};

const SOURCE: &str = "https";
const DEFAULT_SORT_ORDER: i32 = 5;

/// Priority for secure-connection directives, highest among built-ins
pub const HTTPS_PRIORITY: i32 = 15000;

/// Forces directives when the connection is currently secure
///
/// Carries the highest built-in priority so a blanket HTTPS policy can
/// override every content-type or pagination decision.
#[derive(Debug, Clone)]
pub struct HttpsProvider {
    channel: Channel,
    sort_order: i32,
    priority: i32,
}

impl HttpsProvider {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            sort_order: DEFAULT_SORT_ORDER,
            priority: HTTPS_PRIORITY,
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

impl RobotsProvider for HttpsProvider {
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<ProviderResult>> {
        if !ctx.request.secure {
            return Ok(None);
        }

        let directives = ctx.config.https_directives(self.channel);
        if directives.is_empty() {
            return Ok(None);
        }

        Ok(Some(ProviderResult::new(directives, self.priority, SOURCE)))
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
