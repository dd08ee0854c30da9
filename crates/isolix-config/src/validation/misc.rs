//! Validation for the smaller config sections: hover, broadcast, window,
//! and startup.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{IsolixConfig, MAX_HOVER_DELAY_MS};

use super::helpers::{validate_range, validate_range_u64};

/// Shortcut names must be a single word so they can be typed alone.
static SHORTCUT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+$").unwrap());

/// Validate hover debounce constraints.
pub(crate) fn validate_hover(errors: &mut Vec<String>, config: &IsolixConfig) {
    validate_range_u64(
        errors,
        "hover.delay_ms",
        config.hover.delay_ms,
        0,
        MAX_HOVER_DELAY_MS,
    );
}

/// Validate shortcut names and URLs.
pub(crate) fn validate_broadcast(errors: &mut Vec<String>, config: &IsolixConfig) {
    for (name, url) in &config.broadcast.shortcuts {
        if !SHORTCUT_NAME_RE.is_match(name) {
            errors.push(format!(
                "broadcast.shortcuts: '{name}' must be a single word"
            ));
        }
        if !is_web_url(url) {
            errors.push(format!(
                "broadcast.shortcuts.{name} = '{url}' is not an http(s) URL"
            ));
        }
    }
    if !is_web_url(&config.broadcast.default_launch_url) {
        errors.push(format!(
            "broadcast.default_launch_url = '{}' is not an http(s) URL",
            config.broadcast.default_launch_url
        ));
    }
}

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &IsolixConfig) {
    validate_range(errors, "window.width", config.window.width, 400, 10_000);
    validate_range(errors, "window.height", config.window.height, 300, 10_000);
}

/// Validate startup constraints.
pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &IsolixConfig) {
    validate_range_u64(
        errors,
        "startup.splash_duration_ms",
        config.startup.splash_duration_ms,
        0,
        10_000,
    );
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
