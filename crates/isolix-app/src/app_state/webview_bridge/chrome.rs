//! The chrome page: sidebar, panel headers, broadcast bar, dock, dialogs.
//!
//! It is one webview covering the window; panel views sit on top of it.

use isolix_webview::{chrome_key, WebViewConfig, CHROME_IPC_INIT_SCRIPT};

use crate::app_state::core::IsolixApp;
use crate::app_state::ui_state::ChromeInit;

use super::bounds::to_wry_rect;

const CHROME_HTML: &str = include_str!("../../../assets/chrome.html");

impl IsolixApp {
    /// Create the chrome view. It must exist before any panel view so
    /// panels stack above it.
    pub(in crate::app_state) fn create_chrome_view(&mut self) {
        let Some(size) = self.window_logical_size() else {
            return;
        };
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(registry) = self.webviews.as_mut() else {
            tracing::warn!("Cannot create chrome: registry not initialized");
            return;
        };

        let mut config = WebViewConfig::with_html(CHROME_HTML).init_script(CHROME_IPC_INIT_SCRIPT);
        config.devtools = self.config.webview.devtools;
        let bounds = isolix_common::Rect::new(0.0, 0.0, size.width, size.height);

        if let Err(e) = registry.create(chrome_key(), window.as_ref(), to_wry_rect(&bounds), config) {
            tracing::error!(error = %e, "Failed to create chrome webview");
        }
    }

    /// Dispatch a message to the chrome's `window.isolix` handlers.
    pub(in crate::app_state) fn send_to_chrome(&self, kind: &str, payload: &serde_json::Value) {
        let Some(chrome) = self.webviews.as_ref().and_then(|r| r.get(&chrome_key())) else {
            return;
        };
        if let Err(e) = chrome.send_ipc(kind, payload) {
            tracing::warn!(kind, error = %e, "Failed to send to chrome");
        }
    }

    /// Static data the chrome needs once: the app catalog and metrics.
    pub(in crate::app_state) fn send_chrome_init(&self) {
        match serde_json::to_value(ChromeInit::new()) {
            Ok(payload) => self.send_to_chrome("init", &payload),
            Err(e) => tracing::warn!(error = %e, "failed to serialize chrome init"),
        }
    }
}
