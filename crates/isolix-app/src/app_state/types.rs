//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Height of the chrome's custom title bar, in logical pixels.
pub(super) const TITLEBAR_PX: f64 = 36.0;

/// Height of the header the chrome draws above each panel.
pub(super) const PANEL_HEADER_PX: f64 = 40.0;
