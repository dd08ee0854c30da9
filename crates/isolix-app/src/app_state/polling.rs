//! Per-iteration polling: webview events, timers, and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::IsolixApp;
use super::types::POLL_INTERVAL;

impl IsolixApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.poll_webview_events();

        if self.boot.update(now) {
            self.on_boot_phase_changed();
        }

        let effects = self.state.tick(now);
        self.run_effects(effects);

        if self.layout_dirty {
            self.sync_view_bounds();
            self.update_window_title();
            self.layout_dirty = false;
        }
        self.refresh_chrome();

        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }

        let wake = [self.state.next_deadline(), self.boot.deadline()]
            .into_iter()
            .flatten()
            .fold(now + POLL_INTERVAL, Instant::min);
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
