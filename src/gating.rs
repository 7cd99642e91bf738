//! Pre-resolution gating checks
//!
//! Decides whether meta-robots resolution should run at all for a request.
//! Pure predicates over the config accessor and the request snapshot; the
//! checks short-circuit in order of cheapness, but all four are independent.

use crate::config::RobotsConfig;
use crate::request::RequestContext;

/// Whether meta-robots handling should be skipped entirely
///
/// Skips when the feature is disabled, the current URL contains an ignored
/// substring, the request is AJAX, or the full action code is in the
/// ignored-actions list.
pub fn should_skip(config: &dyn RobotsConfig, request: &RequestContext) -> bool {
    if !config.is_enabled() {
        return true;
    }
    if is_ignored_url(config, request) {
        return true;
    }
    if request.ajax {
        return true;
    }
    is_ignored_action(config, request)
}

/// Case-sensitive substring containment against the full current URL
pub fn is_ignored_url(config: &dyn RobotsConfig, request: &RequestContext) -> bool {
    config
        .ignored_urls()
        .iter()
        .any(|part| request.current_url.contains(part.as_str()))
}

/// Exact match of the full action code against the ignored-actions list
pub fn is_ignored_action(config: &dyn RobotsConfig, request: &RequestContext) -> bool {
    let code = request.full_action_code();
    config.ignored_actions().iter().any(|entry| *entry == code)
}
