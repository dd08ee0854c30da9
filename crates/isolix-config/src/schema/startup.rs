//! Startup sequence configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Splash screen duration in milliseconds (valid range: 0-10000).
    /// Zero skips the splash.
    pub splash_duration_ms: u64,
    /// Show the onboarding walkthrough until it has been completed once.
    pub show_onboarding: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: 3000,
            show_onboarding: true,
        }
    }
}
