//! WebView event types.

use isolix_common::IsolationKey;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView, keyed by the view's isolation key.
///
/// The chrome view reports under [`crate::CHROME_KEY`].
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        key: IsolationKey,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { key: IsolationKey, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { key: IsolationKey, body: String },
    /// The page tried to open a new window.
    NewWindowRequested { key: IsolationKey, url: String },
    /// WebView was destroyed.
    Closed { key: IsolationKey },
}

impl WebViewEvent {
    pub fn key(&self) -> &IsolationKey {
        match self {
            WebViewEvent::PageLoad { key, .. }
            | WebViewEvent::TitleChanged { key, .. }
            | WebViewEvent::IpcMessage { key, .. }
            | WebViewEvent::NewWindowRequested { key, .. }
            | WebViewEvent::Closed { key } => key,
        }
    }
}
