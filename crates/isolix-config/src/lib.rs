//! Isolix configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use isolix_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{IsolixConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{data_dir, default_db_path, partition_dir};

use isolix_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// The default location is created with a commented template if it does
/// not exist. An explicit path that is missing is an error.
pub fn load_config(path: Option<&Path>) -> Result<IsolixConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &IsolixConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = IsolixConfig::default();
        let json = config_to_json(&config);
        for section in [
            "\"hover\"",
            "\"layout\"",
            "\"broadcast\"",
            "\"window\"",
            "\"webview\"",
            "\"store\"",
            "\"startup\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let result = load_config(Some(Path::new("/tmp/definitely_missing_isolix.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = IsolixConfig::default();
        let json = config_to_json(&config);
        let parsed: IsolixConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.hover.delay_ms, 500);
        assert_eq!(parsed.layout.hovered_flex, 5);
    }
}
