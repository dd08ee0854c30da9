//! Chrome state: what the chrome page is told to render.

use std::time::Instant;

use serde::Serialize;

use isolix_common::catalog::{AppCategory, AppEntry, APP_LIBRARY, DOCK_APPS};
use isolix_core::{AppState, ChromeSnapshot};

use crate::boot::{BootPhase, BootSequence};

use super::core::IsolixApp;
use super::types::{PANEL_HEADER_PX, TITLEBAR_PX};

/// Everything the chrome re-renders from on each refresh.
#[derive(Debug, Serialize)]
pub(super) struct ChromeState {
    #[serde(flatten)]
    pub snapshot: ChromeSnapshot,
    pub boot: BootPhase,
    /// Splash progress, 0.0 to 1.0.
    pub boot_progress: f64,
    /// Whether panel views are currently shown over the chrome.
    pub panels_shown: bool,
}

impl ChromeState {
    pub(super) fn capture(state: &AppState, boot: &BootSequence, now: Instant) -> Self {
        Self {
            snapshot: ChromeSnapshot::capture(state),
            boot: boot.phase(),
            boot_progress: boot.progress(now),
            panels_shown: boot.is_ready() && state.panels_visible(),
        }
    }
}

/// Sent once, when the chrome reports ready.
#[derive(Debug, Serialize)]
pub(super) struct ChromeInit {
    pub library: &'static [AppCategory],
    pub dock: &'static [AppEntry],
    pub titlebar_px: f64,
    pub panel_header_px: f64,
}

impl ChromeInit {
    pub(super) fn new() -> Self {
        Self {
            library: APP_LIBRARY,
            dock: DOCK_APPS,
            titlebar_px: TITLEBAR_PX,
            panel_header_px: PANEL_HEADER_PX,
        }
    }
}

impl IsolixApp {
    /// Push a fresh snapshot to the chrome if anything changed.
    ///
    /// Stays dirty until the chrome has loaded.
    pub(super) fn refresh_chrome(&mut self) {
        if !self.chrome_dirty || !self.chrome_ready {
            return;
        }
        let payload = match serde_json::to_value(ChromeState::capture(
            &self.state,
            &self.boot,
            Instant::now(),
        )) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize chrome state");
                return;
            }
        };
        self.send_to_chrome("state", &payload);
        self.chrome_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use isolix_config::IsolixConfig;
    use isolix_store::{load_session, MemoryStore};

    use super::*;

    fn fixture(onboarding_completed: bool) -> (AppState, BootSequence) {
        let mut store = MemoryStore::new();
        let mut ids = isolix_common::IdGenerator::new();
        let session = load_session(&mut store, &mut ids).unwrap();
        let config = IsolixConfig::default();
        let boot = BootSequence::new(&config.startup, onboarding_completed, Instant::now());
        (AppState::new(&config, session), boot)
    }

    #[test]
    fn state_flattens_snapshot_and_boot() {
        let (state, boot) = fixture(false);
        let json = serde_json::to_value(ChromeState::capture(&state, &boot, Instant::now())).unwrap();

        assert_eq!(json["boot"]["phase"], "splash");
        assert_eq!(json["panels"].as_array().unwrap().len(), 1);
        assert_eq!(json["panels"][0]["title"], "Google");
        assert_eq!(json["workspaces"][0]["name"], "Default Workspace");
        assert_eq!(json["panels_shown"], false);
    }

    #[test]
    fn panels_shown_once_ready() {
        let (state, mut boot) = fixture(true);
        boot.skip();
        let chrome = ChromeState::capture(&state, &boot, Instant::now());
        assert!(chrome.panels_shown);
        assert!((chrome.boot_progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn init_carries_catalog_and_metrics() {
        let json = serde_json::to_value(ChromeInit::new()).unwrap();
        assert!(!json["library"].as_array().unwrap().is_empty());
        assert!(json["library"][0]["apps"][0]["url"].is_string());
        assert!(!json["dock"].as_array().unwrap().is_empty());
        assert_eq!(json["panel_header_px"], PANEL_HEADER_PX);
    }
}
