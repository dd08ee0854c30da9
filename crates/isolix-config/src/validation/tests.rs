//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = IsolixConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn hover_delay_bounds_inclusive() {
    let mut config = IsolixConfig::default();
    config.hover.delay_ms = 0;
    assert!(validate(&config).is_ok());
    config.hover.delay_ms = 10_000;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_hover_delay_too_large() {
    let mut config = IsolixConfig::default();
    config.hover.delay_ms = 10_001;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hover.delay_ms"));
}

#[test]
fn catches_panel_gap_too_large() {
    let mut config = IsolixConfig::default();
    config.layout.panel_gap = 41;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.panel_gap"));
}

#[test]
fn catches_zero_scroll_threshold() {
    let mut config = IsolixConfig::default();
    config.layout.scroll_threshold = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.scroll_threshold"));
}

#[test]
fn catches_shrunk_not_smaller_than_hovered() {
    let mut config = IsolixConfig::default();
    config.layout.hovered_vw = 30;
    config.layout.shrunk_vw = 30;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be smaller"));
}

#[test]
fn catches_multi_word_shortcut() {
    let mut config = IsolixConfig::default();
    config
        .broadcast
        .shortcuts
        .insert("google maps".into(), "https://maps.google.com".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("single word"));
}

#[test]
fn catches_non_http_shortcut_url() {
    let mut config = IsolixConfig::default();
    config
        .broadcast
        .shortcuts
        .insert("local".into(), "ftp://example.com".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("broadcast.shortcuts.local"));
}

#[test]
fn catches_tiny_window() {
    let mut config = IsolixConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = IsolixConfig::default();
    config.hover.delay_ms = 99_999;
    config.layout.padding = 100;
    config.startup.splash_duration_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hover.delay_ms"));
    assert!(err.contains("layout.padding"));
    assert!(err.contains("startup.splash_duration_ms"));
    assert_eq!(err.matches("; ").count(), 2);
}
