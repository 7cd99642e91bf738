//! URL-pattern rule provider

use crate::config::Channel;
use crate::error::Result;
use crate::provider::{ProviderResult, ResolveContext, RobotsProvider};

const SOURCE: &str = "url_pattern";
const DEFAULT_SORT_ORDER: i32 = 10;

/// Resolves directives from the prioritized URL-pattern rule list
///
/// Rules are sorted by priority, highest first, and the first matching rule
/// with a non-empty payload wins at its own priority. A rule matches when
/// its pattern matches either the full action name or the base URL, so rule
/// authors can target routes or URL shapes interchangeably.
#[derive(Debug, Clone)]
pub struct UrlPatternProvider {
    channel: Channel,
    sort_order: i32,
}

impl UrlPatternProvider {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            sort_order: DEFAULT_SORT_ORDER,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

impl RobotsProvider for UrlPatternProvider {
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Option<ProviderResult>> {
        let mut rules = ctx.config.rules(self.channel);
        if rules.is_empty() {
            return Ok(None);
        }

        // Stable sort: equal-priority rules keep their storage order
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        let full_action = ctx.request.full_action_name();

        for rule in &rules {
            if ctx.matcher.matches(&full_action, &rule.pattern)
                || ctx.matcher.matches(&ctx.request.base_url, &rule.pattern)
            {
                let directives = rule.directives.normalize();
                if directives.is_empty() {
                    // A matching rule with nothing to say does not end the
                    // search; the next rule in priority order may still win.
                    continue;
                }
                return Ok(Some(ProviderResult::new(directives, rule.priority, SOURCE)));
            }
        }

        Ok(None)
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
