//! Embedded view settings shared by every panel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewConfig {
    /// Enable the inspector on panel and chrome views.
    pub devtools: bool,
    /// Override the platform user agent for panel views.
    pub user_agent: Option<String>,
    /// Follow `target=_blank` links in the panel that opened them.
    /// When off, such links are dropped.
    pub allow_popups: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            allow_popups: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webview_defaults() {
        let config = WebViewConfig::default();
        assert!(config.user_agent.is_none());
        assert!(config.allow_popups);
    }

    #[test]
    fn user_agent_in_toml() {
        let config: WebViewConfig = toml::from_str(r#"user_agent = "Isolix/1.0""#).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("Isolix/1.0"));
    }
}
