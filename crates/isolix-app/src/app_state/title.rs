//! Window title management: reflects the active workspace.

use super::core::IsolixApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Format: "{base} - {workspace}", or just the base without a workspace name.
fn window_title(base: &str, workspace: Option<&str>) -> String {
    match workspace.map(str::trim).filter(|w| !w.is_empty()) {
        Some(name) => format!("{base} - {name}"),
        None => base.to_string(),
    }
}

impl IsolixApp {
    /// Update the window title to the active workspace's name.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let name = self.state.active_workspace().map(|w| w.name.as_str());
        window.set_title(&window_title(&self.config.window.title, name));
    }
}

// =============================================================================
// TESTS
// =============================================================================
