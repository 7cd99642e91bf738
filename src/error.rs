//! Error types for robots resolution
//!
//! The error surface is deliberately small: malformed stored directive
//! payloads are normalized to an empty set rather than reported, and a
//! resolution that finds no winner is `Ok(None)`, not an error. What remains
//! are failures in external collaborators — custom configuration backends
//! and custom providers — which the meta path propagates and the header
//! path logs and swallows.

use thiserror::Error;

/// Result type alias for robots resolution operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Errors that can occur while resolving robots directives
#[derive(Error, Debug)]
pub enum RobotsError {
    /// A configuration accessor failed to produce a value
    #[error("configuration read failed: {reason}")]
    Config { reason: String },

    /// A directive provider failed during evaluation
    #[error("provider '{provider}' failed: {reason}")]
    Provider { provider: String, reason: String },

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RobotsError {
    /// Build a configuration error from any displayable reason
    pub fn config(reason: impl Into<String>) -> Self {
        RobotsError::Config {
            reason: reason.into(),
        }
    }

    /// Build a provider error, tagging the failing provider by name
    pub fn provider(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        RobotsError::Provider {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}
