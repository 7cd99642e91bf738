//! Configuration accessor
//!
//! [`RobotsConfig`] is the read-only source of feature flags and directive
//! lists the engine consumes. Most settings exist twice — once for the meta
//! tag channel and once for the X-Robots-Tag header channel — so the
//! accessors are keyed by [`Channel`].
//!
//! [`StaticConfig`] is the bundled in-memory implementation, used in tests
//! and as simple wiring for hosts that load their settings up front. Custom
//! backends implement the trait.

use serde::{Deserialize, Serialize};

use crate::directive::DirectiveSet;
use crate::rule::Rule;

/// Which output the directives are destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// The page's meta-robots tag
    Meta,
    /// The X-Robots-Tag response header
    Header,
}

/// Read-only source of feature flags and directive lists
pub trait RobotsConfig {
    /// Master switch for the whole subsystem
    fn is_enabled(&self) -> bool;

    /// Independent switch for the X-Robots-Tag header path
    fn is_xheader_enabled(&self) -> bool;

    /// URL substrings that exempt a request from meta-robots handling
    fn ignored_urls(&self) -> Vec<String>;

    /// Full action codes that exempt a request from meta-robots handling
    fn ignored_actions(&self) -> Vec<String>;

    /// Configured URL-pattern rules for a channel, in storage order
    fn rules(&self, channel: Channel) -> Vec<Rule>;

    /// Whether pagination-only handling is on for a channel
    fn is_paginated_enabled(&self, channel: Channel) -> bool;

    /// Whether pagination-plus-filters handling is on for a channel
    fn is_paginated_filtered_enabled(&self, channel: Channel) -> bool;

    /// Directives for pagination-only pages
    fn paginated_directives(&self, channel: Channel) -> DirectiveSet;

    /// Directives for pagination-plus-filters pages
    fn paginated_filtered_directives(&self, channel: Channel) -> DirectiveSet;

    /// Directives forced on 404 (noroute) pages
    fn noroute_directives(&self, channel: Channel) -> DirectiveSet;

    /// Directives forced on secure-connection requests
    fn https_directives(&self, channel: Channel) -> DirectiveSet;
}

/// Per-channel slice of the static configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelSettings {
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub paginated_enabled: bool,
    #[serde(default)]
    pub paginated_filtered_enabled: bool,
    #[serde(default)]
    pub paginated: DirectiveSet,
    #[serde(default)]
    pub paginated_filtered: DirectiveSet,
    #[serde(default)]
    pub noroute: DirectiveSet,
    #[serde(default)]
    pub https: DirectiveSet,
}

/// In-memory configuration with builder-style setters
///
/// Both feature switches default to on; everything else starts empty, which
/// makes every provider report "not applicable" until configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    pub enabled: bool,
    pub header_enabled: bool,
    #[serde(default)]
    pub ignored_urls: Vec<String>,
    #[serde(default)]
    pub ignored_actions: Vec<String>,
    #[serde(default)]
    pub meta: ChannelSettings,
    #[serde(default)]
    pub header: ChannelSettings,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header_enabled: true,
            ignored_urls: Vec::new(),
            ignored_actions: Vec::new(),
            meta: ChannelSettings::default(),
            header: ChannelSettings::default(),
        }
    }
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_header_enabled(mut self, enabled: bool) -> Self {
        self.header_enabled = enabled;
        self
    }

    pub fn with_ignored_url(mut self, url_part: impl Into<String>) -> Self {
        self.ignored_urls.push(url_part.into());
        self
    }

    pub fn with_ignored_action(mut self, action_code: impl Into<String>) -> Self {
        self.ignored_actions.push(action_code.into());
        self
    }

    pub fn with_rule(mut self, channel: Channel, rule: Rule) -> Self {
        self.channel_mut(channel).rules.push(rule);
        self
    }

    pub fn with_paginated(mut self, channel: Channel, directives: DirectiveSet) -> Self {
        let settings = self.channel_mut(channel);
        settings.paginated_enabled = true;
        settings.paginated = directives;
        self
    }

    pub fn with_paginated_filtered(mut self, channel: Channel, directives: DirectiveSet) -> Self {
        let settings = self.channel_mut(channel);
        settings.paginated_filtered_enabled = true;
        settings.paginated_filtered = directives;
        self
    }

    pub fn with_noroute(mut self, channel: Channel, directives: DirectiveSet) -> Self {
        self.channel_mut(channel).noroute = directives;
        self
    }

    pub fn with_https(mut self, channel: Channel, directives: DirectiveSet) -> Self {
        self.channel_mut(channel).https = directives;
        self
    }

    fn channel(&self, channel: Channel) -> &ChannelSettings {
        match channel {
            Channel::Meta => &self.meta,
            Channel::Header => &self.header,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut ChannelSettings {
        match channel {
            Channel::Meta => &mut self.meta,
            Channel::Header => &mut self.header,
        }
    }
}

impl RobotsConfig for StaticConfig {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_xheader_enabled(&self) -> bool {
        self.header_enabled
    }

    fn ignored_urls(&self) -> Vec<String> {
        self.ignored_urls.clone()
    }

    fn ignored_actions(&self) -> Vec<String> {
        self.ignored_actions.clone()
    }

    fn rules(&self, channel: Channel) -> Vec<Rule> {
        self.channel(channel).rules.clone()
    }

    fn is_paginated_enabled(&self, channel: Channel) -> bool {
        self.channel(channel).paginated_enabled
    }

    fn is_paginated_filtered_enabled(&self, channel: Channel) -> bool {
        self.channel(channel).paginated_filtered_enabled
    }

    fn paginated_directives(&self, channel: Channel) -> DirectiveSet {
        self.channel(channel).paginated.clone()
    }

    fn paginated_filtered_directives(&self, channel: Channel) -> DirectiveSet {
        self.channel(channel).paginated_filtered.clone()
    }

    fn noroute_directives(&self, channel: Channel) -> DirectiveSet {
        self.channel(channel).noroute.clone()
    }

    fn https_directives(&self, channel: Channel) -> DirectiveSet {
        self.channel(channel).https.clone()
    }
}
