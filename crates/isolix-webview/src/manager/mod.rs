//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per panel plus
//! the chrome page, and collects their events for the main loop.

use std::sync::{Arc, Mutex};

use isolix_common::IsolationKey;

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Isolation key of the chrome view. Panel keys always start with `panel_`.
pub const CHROME_KEY: &str = "chrome";

pub fn chrome_key() -> IsolationKey {
    IsolationKey::from(CHROME_KEY)
}

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink. Handlers push here and the main loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
