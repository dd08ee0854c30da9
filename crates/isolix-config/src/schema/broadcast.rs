//! Broadcast bar configuration: service shortcuts and the launch fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Single-word inputs that open a new panel instead of broadcasting.
    /// Keys are matched case-insensitively.
    pub shortcuts: BTreeMap<String, String>,
    /// URL used when a panel is added without one.
    pub default_launch_url: String,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            shortcuts: default_shortcuts(),
            default_launch_url: "https://search.brave.com".into(),
        }
    }
}

pub fn default_shortcuts() -> BTreeMap<String, String> {
    [
        ("google", "https://google.com"),
        ("chatgpt", "https://chatgpt.com"),
        ("claude", "https://claude.ai"),
        ("perplexity", "https://perplexity.ai"),
        ("youtube", "https://youtube.com"),
        ("gmail", "https://gmail.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_defaults() {
        let config = BroadcastConfig::default();
        assert_eq!(config.shortcuts.len(), 6);
        assert_eq!(config.shortcuts["google"], "https://google.com");
        assert_eq!(config.shortcuts["gmail"], "https://gmail.com");
        assert_eq!(config.default_launch_url, "https://search.brave.com");
    }

    #[test]
    fn shortcuts_table_replaces_defaults() {
        let toml_str = r#"
[shortcuts]
docs = "https://docs.rs"
"#;
        let config: BroadcastConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.shortcuts.len(), 1);
        assert_eq!(config.shortcuts["docs"], "https://docs.rs");
        assert_eq!(config.default_launch_url, "https://search.brave.com");
    }
}
