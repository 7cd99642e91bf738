//! Request facade
//!
//! [`RequestContext`] is the read-only snapshot of the inbound request that
//! providers and gating checks consume: the route triplet, the query
//! parameter map, the AJAX and TLS flags, and the two URL views (the full
//! current URL for ignore-list checks, the canonical base URL for pattern
//! matching). It is built once per request cycle and never shared across
//! requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Controller name the routing layer assigns to unmatched (404) requests
pub const NOROUTE_CONTROLLER: &str = "noroute";

/// Query parameter that marks a paginated listing page
pub const PAGE_PARAM: &str = "p";

/// Read-only snapshot of one inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Route module name, e.g. "catalog"
    pub module: String,
    /// Route controller name, e.g. "product"
    pub controller: String,
    /// Route action name, e.g. "view"
    pub action: String,
    /// Query parameters of the current URL
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Whether this is an AJAX request
    #[serde(default)]
    pub ajax: bool,
    /// Whether the connection is currently secure
    #[serde(default)]
    pub secure: bool,
    /// Full current URL, including query string
    #[serde(default)]
    pub current_url: String,
    /// Canonical base URL used for pattern matching
    #[serde(default)]
    pub base_url: String,
}

impl RequestContext {
    /// Create a snapshot for the given route triplet
    pub fn new(
        module: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            controller: controller.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Mark the request as AJAX
    pub fn with_ajax(mut self, ajax: bool) -> Self {
        self.ajax = ajax;
        self
    }

    /// Mark the connection as secure
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the full current URL
    pub fn with_current_url(mut self, url: impl Into<String>) -> Self {
        self.current_url = url.into();
        self
    }

    /// Set the canonical base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Full action name: the route triplet joined with underscores
    pub fn full_action_name(&self) -> String {
        format!("{}_{}_{}", self.module, self.controller, self.action)
    }

    /// Lowercased full action name, used for ignored-action comparison
    pub fn full_action_code(&self) -> String {
        self.full_action_name().to_lowercase()
    }

    /// Whether the routing layer resolved this request to the 404 handler
    pub fn is_noroute(&self) -> bool {
        self.controller == NOROUTE_CONTROLLER
    }
}
