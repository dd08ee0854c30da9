//! IsolixApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use isolix_config::IsolixConfig;
use isolix_core::AppState;
use isolix_store::{Session, WorkspaceStore};
use isolix_webview::WebViewRegistry;

use crate::boot::BootSequence;
use crate::persist::PersistWorker;

/// Top-level application state.
pub struct IsolixApp {
    pub(super) config: IsolixConfig,

    // Workspaces, panels, hover, dialogs
    pub(super) state: AppState,
    pub(super) boot: BootSequence,

    // Store writes run off the event loop
    pub(super) persist: PersistWorker,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Chrome plus one view per mounted panel
    pub(super) webviews: Option<WebViewRegistry>,

    /// Root of the per-panel profile directories.
    pub(super) data_dir: PathBuf,

    /// The chrome page has registered its handlers.
    pub(super) chrome_ready: bool,
    /// A state snapshot must be pushed to the chrome.
    pub(super) chrome_dirty: bool,
    /// View bounds or visibility must be recomputed.
    pub(super) layout_dirty: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl IsolixApp {
    pub fn new(config: IsolixConfig, session: Session, store: Box<dyn WorkspaceStore>) -> Self {
        let boot = BootSequence::new(&config.startup, session.onboarding_completed, Instant::now());
        let state = AppState::new(&config, session);
        let data_dir = isolix_config::data_dir().unwrap_or_else(|e| {
            let fallback = std::env::temp_dir().join("isolix");
            tracing::warn!(error = %e, fallback = %fallback.display(), "no data directory, using temp");
            fallback
        });

        Self {
            config,
            state,
            boot,
            persist: PersistWorker::start(store),
            window: None,
            webviews: None,
            data_dir,
            chrome_ready: false,
            chrome_dirty: true,
            layout_dirty: true,
            should_exit: false,
        }
    }
}
