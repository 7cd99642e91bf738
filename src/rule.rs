//! Configured URL-pattern rules
//!
//! A rule associates a glob-style pattern with a directive payload and an
//! explicit priority. Rules arrive from configuration in no particular
//! order; the URL-pattern provider sorts them itself.

use serde::{Deserialize, Serialize};

use crate::directive::DirectivePayload;

/// Priority assumed when a stored rule carries none
pub const DEFAULT_RULE_PRIORITY: i32 = 500;

/// A configured pattern → directives association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Glob-style pattern matched against the full action name or base URL
    pub pattern: String,

    /// Higher priority wins among matching rules
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Directive payload in any stored shape
    #[serde(default)]
    pub directives: DirectivePayload,
}

fn default_priority() -> i32 {
    DEFAULT_RULE_PRIORITY
}

impl Rule {
    /// Create a rule at the default priority
    pub fn new(pattern: impl Into<String>, directives: DirectivePayload) -> Self {
        Self {
            pattern: pattern.into(),
            priority: DEFAULT_RULE_PRIORITY,
            directives,
        }
    }

    /// Override the rule priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
