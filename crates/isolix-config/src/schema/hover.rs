//! Hover debounce configuration.

use serde::{Deserialize, Serialize};

/// Default settle delay before a hovered panel expands.
pub const DEFAULT_HOVER_DELAY_MS: u64 = 500;

/// Upper bound accepted for the hover delay, in milliseconds.
pub const MAX_HOVER_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Milliseconds the pointer must rest on a panel before it expands
    /// (valid range: 0-10000). A value stored at runtime takes precedence.
    pub delay_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_HOVER_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_defaults() {
        assert_eq!(HoverConfig::default().delay_ms, 500);
    }

    #[test]
    fn hover_partial_toml() {
        let config: HoverConfig = toml::from_str("delay_ms = 1200").unwrap();
        assert_eq!(config.delay_ms, 1200);
    }
}
