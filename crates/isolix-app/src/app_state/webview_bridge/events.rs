//! Webview event polling: page loads, titles, IPC, popups.

use isolix_common::{Command, IsolationKey, NavStatus};
use isolix_webview::{EmbeddedView, WebViewEvent, CHROME_KEY};

use crate::app_state::core::IsolixApp;

impl IsolixApp {
    /// Process pending webview events.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let Some(registry) = self.webviews.as_mut() else {
            return;
        };
        let tracked: Vec<(WebViewEvent, Option<NavStatus>)> = registry
            .drain_events()
            .into_iter()
            .map(|event| {
                let status = registry.track(&event);
                (event, status)
            })
            .collect();

        for (event, status) in tracked {
            self.handle_webview_event(event, status);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent, status: Option<NavStatus>) {
        match event {
            WebViewEvent::IpcMessage { key, body } => {
                if key.as_str() == CHROME_KEY {
                    self.handle_chrome_message(&body);
                } else {
                    self.handle_panel_message(&key, &body);
                }
            }
            WebViewEvent::PageLoad { key, state, url } => {
                tracing::debug!(key = %key, ?state, url = %url, "WebView page load event");
                let (Some(status), Some(id)) = (status, self.panel_id_for(&key)) else {
                    return;
                };
                self.dispatch(Command::ViewStatus { id, status });
            }
            WebViewEvent::TitleChanged { key, title } => {
                if let Some(id) = self.panel_id_for(&key) {
                    self.dispatch(Command::PageTitleChanged { id, title });
                }
            }
            WebViewEvent::NewWindowRequested { key, url } => {
                self.handle_popup(&key, &url);
            }
            WebViewEvent::Closed { key } => {
                tracing::debug!(key = %key, "WebView closed event");
            }
        }
    }

    /// Popups open in the panel that asked for them, when allowed.
    fn handle_popup(&mut self, key: &IsolationKey, url: &str) {
        if key.as_str() == CHROME_KEY {
            return;
        }
        if !self.config.webview.allow_popups {
            tracing::debug!(key = %key, url, "popup blocked by config");
            return;
        }
        let Some(view) = self.webviews.as_mut().and_then(|r| r.get_mut(key)) else {
            return;
        };
        if let Err(e) = view.navigate(url) {
            tracing::warn!(key = %key, error = %e, "failed to open popup in place");
        }
    }

    fn panel_id_for(&self, key: &IsolationKey) -> Option<isolix_common::PanelId> {
        self.panel_for_key(key).map(|p| p.id.clone())
    }
}
