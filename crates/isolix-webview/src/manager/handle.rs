use isolix_common::{HistoryStep, InjectError, IsolationKey, IsolixError, NavStatus};
use tracing::debug;
use wry::{WebContext, WebView};

use crate::capability::EmbeddedView;
use crate::events::PageLoadState;
use crate::history::NavHistory;
use crate::inject::injection_script;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// Declared before `context` so the view is dropped first.
    pub(super) webview: WebView,
    /// Profile backing this view's cookies and storage.
    pub(super) context: Option<WebContext>,
    pub(super) key: IsolationKey,
    pub(super) history: NavHistory,
    pub(super) loading: bool,
    pub(super) current_title: String,
}

impl WebViewHandle {
    pub fn key(&self) -> &IsolationKey {
        &self.key
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Whether this view keeps its own profile on disk.
    pub fn is_isolated(&self) -> bool {
        self.context.is_some()
    }

    /// Fold a page-load event into the tracked navigation state.
    pub fn page_load(&mut self, state: PageLoadState, url: &str) {
        match state {
            PageLoadState::Started => self.loading = true,
            PageLoadState::Finished => {
                self.loading = false;
                self.history.loaded(url);
            }
        }
    }

    pub fn nav_status(&self) -> NavStatus {
        NavStatus {
            url: self.history.current().to_string(),
            loading: self.loading,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        }
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to the page's `window.isolix` handlers.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Return focus to the parent window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }
}

impl EmbeddedView for WebViewHandle {
    fn current_url(&self) -> &str {
        self.history.current()
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn navigate(&mut self, url: &str) -> Result<(), IsolixError> {
        self.webview
            .load_url(url)
            .map_err(|e| IsolixError::WebView(e.to_string()))
    }

    fn history(&mut self, step: HistoryStep) -> Result<(), IsolixError> {
        if !self.history.request(step) {
            return Ok(());
        }
        let script = match step {
            HistoryStep::Back => "history.back();",
            HistoryStep::Forward => "history.forward();",
            HistoryStep::Reload => "location.reload();",
        };
        self.webview
            .evaluate_script(script)
            .map_err(|e| IsolixError::WebView(e.to_string()))
    }

    fn inject_text(&self, payload: &str) -> Result<(), InjectError> {
        let key = self.key.clone();
        let script = injection_script(payload)?;
        self.webview
            .evaluate_script_with_callback(&script, move |result| {
                debug!(key = %key, found_field = %result, "injection finished");
            })
            .map_err(|e| InjectError::Script(e.to_string()))
    }
}
