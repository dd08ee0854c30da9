//! Window creation and webview setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use isolix_core::Viewport;
use isolix_webview::{WebViewManager, WebViewRegistry};

use super::core::IsolixApp;
use super::webview_bridge::strip_area;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl IsolixApp {
    /// Create the window and the webview registry.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let cfg = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_decorations(cfg.decorations)
            .with_maximized(cfg.start_maximized)
            .with_inner_size(LogicalSize::new(cfg.width as f64, cfg.height as f64));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.window = Some(window);
        self.webviews = Some(WebViewRegistry::new(WebViewManager::new()));
        tracing::info!(
            data_dir = %self.data_dir.display(),
            "Window created and WebView registry initialized"
        );
        true
    }

    /// Window size in logical pixels, if there is a window.
    pub(super) fn window_logical_size(&self) -> Option<LogicalSize<f64>> {
        let window = self.window.as_ref()?;
        Some(window.inner_size().to_logical(window.scale_factor()))
    }

    /// Hand the current window geometry to the state.
    pub(super) fn update_viewport(&mut self) {
        let Some(size) = self.window_logical_size() else {
            return;
        };
        let viewport = Viewport {
            strip: strip_area(&self.config.layout, size.width, size.height),
            window_width: size.width,
        };
        let effects = self.state.set_viewport(viewport);
        self.run_effects(effects);
        // The chrome spans the whole window and follows every resize.
        self.layout_dirty = true;
    }
}
