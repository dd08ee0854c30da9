//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window settings.
///
/// The shell draws its own title bar, so native decorations are off by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels (valid range: 400-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 300-10000).
    pub height: u32,
    pub decorations: bool,
    pub title: String,
    pub start_maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
            decorations: false,
            title: "Isolix".into(),
            start_maximized: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
