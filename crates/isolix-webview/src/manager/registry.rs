use std::collections::HashMap;

use isolix_common::{IsolationKey, NavStatus};
use tracing::info;
use wry::raw_window_handle;

use crate::capability::{EmbeddedView, ViewResolver};
use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps isolation keys to live WebView handles.
///
/// A panel's view is found by its isolation key, never by position, so a
/// reorder or a workspace switch cannot mix up sessions.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<IsolationKey, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView and register it under `key`.
    ///
    /// An existing view under the same key is replaced.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        key: IsolationKey,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(key.clone(), window, bounds, config)?;
        self.handles.insert(key, handle);
        Ok(())
    }

    pub fn get(&self, key: &IsolationKey) -> Option<&WebViewHandle> {
        self.handles.get(key)
    }

    pub fn get_mut(&mut self, key: &IsolationKey) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(key)
    }

    pub fn contains(&self, key: &IsolationKey) -> bool {
        self.handles.contains_key(key)
    }

    /// Destroy a WebView. Its on-disk profile stays for the next launch.
    pub fn destroy(&mut self, key: &IsolationKey) -> bool {
        if self.handles.remove(key).is_some() {
            info!(key = %key, "WebView destroyed");
            self.manager
                .push_event(WebViewEvent::Closed { key: key.clone() });
            true
        } else {
            false
        }
    }

    /// All keys with a live WebView.
    pub fn keys(&self) -> Vec<IsolationKey> {
        self.handles.keys().cloned().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Fold a page-load event into the view's tracked state and return the
    /// updated status. Other events are ignored.
    pub fn track(&mut self, event: &WebViewEvent) -> Option<NavStatus> {
        match event {
            WebViewEvent::PageLoad { key, state, url } => {
                let handle = self.handles.get_mut(key)?;
                handle.page_load(*state, url);
                Some(handle.nav_status())
            }
            WebViewEvent::TitleChanged { key, title } => {
                if let Some(handle) = self.handles.get_mut(key) {
                    handle.set_title(title.clone());
                }
                None
            }
            _ => None,
        }
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for key in self.keys() {
            self.destroy(&key);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

impl ViewResolver for WebViewRegistry {
    fn resolve(&self, key: &IsolationKey) -> Option<&dyn EmbeddedView> {
        self.handles.get(key).map(|h| h as &dyn EmbeddedView)
    }
}
