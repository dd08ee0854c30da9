//! Persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// When false, workspaces live in memory for the session only.
    pub enabled: bool,
    /// Database file. Defaults to `prism.db` in the platform data directory.
    pub path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}
