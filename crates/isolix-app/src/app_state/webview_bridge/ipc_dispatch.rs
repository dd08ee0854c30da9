//! IPC message validation and dispatch from webviews to the reducer.

use isolix_common::{Command, IsolationKey};
use isolix_webview::{parse_chrome_message, parse_panel_message, ChromeRequest, IpcError, PanelSignal};

use crate::app_state::core::IsolixApp;

// =============================================================================
// TRANSLATION
// =============================================================================

/// Command for a pointer report from panel `id`'s page.
///
/// Leaves name their panel, since views report independently and a leave
/// may land after the next panel's enter.
pub fn panel_signal_command(signal: PanelSignal, id: isolix_common::PanelId) -> Command {
    match signal {
        PanelSignal::PointerEnter => Command::Hover(id),
        PanelSignal::PointerLeave => Command::Unhover(id),
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl IsolixApp {
    /// Handle a single IPC message from the chrome page.
    pub(in crate::app_state) fn handle_chrome_message(&mut self, body: &str) {
        match parse_chrome_message(body) {
            Ok(ChromeRequest::Ready) => {
                tracing::info!("Chrome ready");
                self.chrome_ready = true;
                self.chrome_dirty = true;
                self.send_chrome_init();
            }
            Ok(ChromeRequest::Command(command)) => {
                self.dispatch(command);
            }
            Ok(ChromeRequest::DragWindow) => {
                if let Some(ref w) = self.window {
                    if let Err(e) = w.drag_window() {
                        tracing::debug!(error = %e, "window drag refused");
                    }
                }
            }
            Err(IpcError::Blocked(kind)) => {
                tracing::warn!(kind = %kind, "IPC message rejected: kind not allowed");
            }
            Err(e) => {
                tracing::warn!(body_len = body.len(), error = %e, "IPC message rejected");
            }
        }
    }

    /// Handle a single IPC message from a panel page.
    pub(in crate::app_state) fn handle_panel_message(&mut self, key: &IsolationKey, body: &str) {
        let signal = match parse_panel_message(body) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "IPC message rejected");
                return;
            }
        };
        let Some(panel) = self.panel_for_key(key) else {
            tracing::debug!(key = %key, "pointer report from unmounted panel");
            return;
        };
        let command = panel_signal_command(signal, panel.id.clone());
        self.dispatch(command);
    }
}

// =============================================================================
// TESTS
// =============================================================================
