//! Config and data path resolution, default file creation.

use isolix_common::{ConfigError, IsolationKey};
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "isolix";

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Per-user data directory holding the database and panel partitions.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))?;
    Ok(base.join(APP_DIR))
}

pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("prism.db"))
}

/// Storage directory for one panel's isolated browsing data.
pub fn partition_dir(root: &Path, key: &IsolationKey) -> PathBuf {
    root.join("partitions").join(key.as_str())
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
