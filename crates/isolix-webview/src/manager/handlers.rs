use std::sync::{Arc, Mutex};

use isolix_common::IsolationKey;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::{WebViewManager, CHROME_KEY};

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Schemes a panel page may navigate to.
pub const PANEL_NAV_SCHEMES: &[&str] = &[
    "https://", "http://", "file://", "about:", "blob:", "data:",
];

/// Check whether `key`'s view may navigate to `url`.
///
/// Panels browse the web freely but never run `javascript:` or unknown
/// schemes. The chrome is local content and must never be replaced by a
/// remote page.
pub fn is_navigation_allowed(key: &str, url: &str) -> bool {
    if key == CHROME_KEY {
        return !(url.starts_with("http://") || url.starts_with("https://"));
    }
    PANEL_NAV_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: IsolationKey,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    key = %key,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            push(
                &events,
                WebViewEvent::IpcMessage {
                    key: key.clone(),
                    body,
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: IsolationKey,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(key = %key, ?state, url = %url, "page load");
            push(
                &events,
                WebViewEvent::PageLoad {
                    key: key.clone(),
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: IsolationKey,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(key = %key, title = %title, "title changed");
            push(
                &events,
                WebViewEvent::TitleChanged {
                    key: key.clone(),
                    title,
                },
            );
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        key: IsolationKey,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(key.as_str(), &url) {
                warn!(key = %key, url = %url, "navigation blocked");
                return false;
            }
            true
        })
    }

    /// Popups never open a second window; the request is reported and the
    /// shell decides what to do with it.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: IsolationKey,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(key = %key, url = %url, "new window requested");
            push(
                &events,
                WebViewEvent::NewWindowRequested {
                    key: key.clone(),
                    url,
                },
            );
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: &str = "panel_p1";

    #[test]
    fn panels_browse_the_web() {
        assert!(is_navigation_allowed(PANEL, "https://chatgpt.com/"));
        assert!(is_navigation_allowed(PANEL, "http://localhost:3000"));
        assert!(is_navigation_allowed(PANEL, "about:blank"));
        assert!(is_navigation_allowed(PANEL, "file:///tmp/index.html"));
    }

    #[test]
    fn panels_block_script_and_unknown_schemes() {
        assert!(!is_navigation_allowed(PANEL, "javascript:alert(1)"));
        assert!(!is_navigation_allowed(PANEL, "ftp://files.example.com"));
        assert!(!is_navigation_allowed(PANEL, ""));
        assert!(!is_navigation_allowed(PANEL, "not-a-url"));
    }

    #[test]
    fn chrome_stays_local() {
        assert!(is_navigation_allowed(CHROME_KEY, "about:blank"));
        assert!(is_navigation_allowed(CHROME_KEY, "data:text/html,<p>x</p>"));
        assert!(!is_navigation_allowed(CHROME_KEY, "https://evil.com"));
        assert!(!is_navigation_allowed(CHROME_KEY, "http://evil.com"));
    }
}
