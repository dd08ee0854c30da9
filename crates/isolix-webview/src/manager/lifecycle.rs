use std::sync::Arc;

use isolix_common::IsolationKey;
use tracing::info;
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use crate::history::NavHistory;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window. When
    /// the config names a data directory, the view gets its own profile
    /// there and the handle keeps it alive.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        key: IsolationKey,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut context = config
            .data_directory
            .clone()
            .map(|dir| WebContext::new(Some(dir)));

        let mut builder = match context.as_mut() {
            Some(ctx) => WebViewBuilder::with_web_context(ctx),
            None => WebViewBuilder::new(),
        };
        builder = builder
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_visible(config.visible)
            .with_focused(false);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), key.clone());
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), key.clone());
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), key.clone());
        builder = Self::attach_navigation_handler(builder, key.clone());
        builder =
            Self::attach_new_window_handler(builder, Arc::clone(&self.events), key.clone());

        let initial_url = config.initial_url();
        builder = match (&config.url, &config.html) {
            (Some(url), _) => builder.with_url(url),
            (None, Some(html)) => builder.with_html(html),
            (None, None) => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;

        info!(
            key = %key,
            url = %initial_url,
            isolated = context.is_some(),
            "WebView created"
        );

        Ok(WebViewHandle {
            webview,
            context,
            key,
            history: NavHistory::new(&initial_url),
            loading: true,
            current_title: String::new(),
        })
    }
}
