//! Configuration schema types for Isolix.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the shell ships with.

mod broadcast;
mod hover;
mod layout;
mod logging;
mod startup;
mod store;
mod webview;
mod window;

pub use broadcast::*;
pub use hover::*;
pub use layout::*;
pub use logging::*;
pub use startup::*;
pub use store::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Isolix.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct IsolixConfig {
    pub hover: HoverConfig,
    pub layout: LayoutConfig,
    pub broadcast: BroadcastConfig,
    pub window: WindowConfig,
    pub webview: WebViewConfig,
    pub store: StoreConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
