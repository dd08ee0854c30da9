//! Core TOML config loading: read from path or platform default.

use crate::schema::IsolixConfig;
use crate::validation;
use isolix_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<IsolixConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: IsolixConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed values as-is");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/isolix/config.toml`
/// On Linux: `~/.config/isolix/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<IsolixConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}

/// Load `path`, writing the commented template there first if it is missing.
pub(crate) fn load_or_create(path: &Path) -> Result<IsolixConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(path)?;
            Ok(IsolixConfig::default())
        }
        Err(e) => Err(e),
    }
}
