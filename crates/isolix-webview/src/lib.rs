//! Embedded web views for Isolix panels and the chrome.
//!
//! Wraps the `wry` crate to provide:
//! - One isolated WebView per panel, each with its own data directory
//! - The [`EmbeddedView`] capability the rest of the shell talks to
//! - Broadcast injection of text into panel pages
//! - Bidirectional IPC with the chrome page and pointer reports from panels
//! - Navigation tracking (history availability, title changes)

pub mod broadcast;
pub mod capability;
pub mod events;
pub mod history;
pub mod inject;
pub mod ipc;
pub mod manager;

pub use broadcast::{BroadcastInjector, BroadcastReport};
pub use capability::{EmbeddedView, ViewResolver};
pub use events::{PageLoadState, WebViewEvent};
pub use history::NavHistory;
pub use inject::injection_script;
pub use ipc::{ChromeRequest, IpcError, IpcMessage, PanelSignal};
pub use manager::{
    chrome_key, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry, CHROME_KEY,
};
