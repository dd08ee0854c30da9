//! Command dispatch: runs a command through the reducer and carries out
//! the effects it returns.

use std::time::Instant;

use isolix_common::Command;
use isolix_core::{BootSignal, Effect, WindowSignal};
use isolix_store::{StoreOp, ONBOARDING_COMPLETED_KEY};
use isolix_webview::{BroadcastInjector, EmbeddedView};

use crate::boot::OnboardingAdvance;

use super::core::IsolixApp;

impl IsolixApp {
    /// Apply a [`Command`] to the state and execute the resulting effects.
    pub(super) fn dispatch(&mut self, command: Command) {
        let effects = self.state.apply(command, Instant::now());
        self.run_effects(effects);
    }

    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Persist(op) => self.persist.submit(op),
            Effect::Broadcast(decision) => match self.webviews.as_ref() {
                Some(registry) => {
                    BroadcastInjector::deliver(&decision, registry);
                }
                None => tracing::warn!("broadcast dropped: no webviews yet"),
            },
            Effect::SyncViews => self.sync_panel_views(),
            Effect::Relayout => {
                self.layout_dirty = true;
                self.chrome_dirty = true;
            }
            Effect::NavigateView { key, url } => {
                let Some(view) = self.webviews.as_mut().and_then(|r| r.get_mut(&key)) else {
                    tracing::debug!(key = %key, "navigate skipped: view not mounted");
                    return;
                };
                if let Err(e) = view.navigate(&url) {
                    tracing::warn!(key = %key, error = %e, "navigation failed");
                }
            }
            Effect::ViewHistory { key, step } => {
                let Some(view) = self.webviews.as_mut().and_then(|r| r.get_mut(&key)) else {
                    tracing::debug!(key = %key, "history step skipped: view not mounted");
                    return;
                };
                if let Err(e) = view.history(step) {
                    tracing::warn!(key = %key, ?step, error = %e, "history step failed");
                }
            }
            Effect::ClearBroadcastInput => {
                self.send_to_chrome("clear_broadcast", &serde_json::Value::Null);
            }
            Effect::RefreshChrome => self.chrome_dirty = true,
            Effect::Window(signal) => self.handle_window_signal(signal),
            Effect::Boot(signal) => self.handle_boot_signal(signal),
        }
    }

    fn handle_window_signal(&mut self, signal: WindowSignal) {
        match signal {
            WindowSignal::Minimize => {
                if let Some(ref w) = self.window {
                    w.set_minimized(true);
                }
            }
            WindowSignal::ToggleMaximize => {
                if let Some(ref w) = self.window {
                    w.set_maximized(!w.is_maximized());
                }
            }
            WindowSignal::Close => {
                tracing::info!("Close requested from chrome");
                self.should_exit = true;
            }
        }
    }

    fn handle_boot_signal(&mut self, signal: BootSignal) {
        let changed = match signal {
            BootSignal::SkipSplash => self.boot.skip(),
            BootSignal::AdvanceOnboarding => match self.boot.advance() {
                OnboardingAdvance::Ignored => false,
                OnboardingAdvance::Step(step) => {
                    tracing::debug!(step, "onboarding step");
                    true
                }
                OnboardingAdvance::Completed => {
                    tracing::info!("onboarding completed");
                    self.persist.submit(StoreOp::SetSetting {
                        key: ONBOARDING_COMPLETED_KEY.into(),
                        value: "true".into(),
                    });
                    true
                }
            },
        };
        if changed {
            self.on_boot_phase_changed();
        }
    }

    /// Panels appear or disappear with the boot phase.
    pub(super) fn on_boot_phase_changed(&mut self) {
        tracing::debug!(phase = ?self.boot.phase(), "boot phase changed");
        self.layout_dirty = true;
        self.chrome_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use isolix_common::{Command, IdGenerator};
    use isolix_config::IsolixConfig;
    use isolix_store::{load_session, MemoryStore, ONBOARDING_COMPLETED_KEY};

    use crate::app_state::core::IsolixApp;
    use crate::boot::BootPhase;

    fn app(config: IsolixConfig) -> IsolixApp {
        let mut store = MemoryStore::new();
        let session = load_session(&mut store, &mut IdGenerator::new()).unwrap();
        IsolixApp::new(config, session, Box::new(store))
    }

    fn first_run_config() -> IsolixConfig {
        let mut config = IsolixConfig::default();
        config.startup.splash_duration_ms = 0;
        config.startup.show_onboarding = true;
        config
    }

    #[test]
    fn close_command_requests_exit() {
        let mut app = app(IsolixConfig::default());
        app.dispatch(Command::Close);
        assert!(app.should_exit);
    }

    #[test]
    fn window_commands_without_window_are_harmless() {
        let mut app = app(IsolixConfig::default());
        app.dispatch(Command::Minimize);
        app.dispatch(Command::ToggleMaximize);
        assert!(!app.should_exit);
    }

    #[test]
    fn skip_splash_reaches_boot() {
        let mut app = app(IsolixConfig::default());
        assert_eq!(app.boot.phase(), BootPhase::Splash);
        app.layout_dirty = false;
        app.dispatch(Command::SkipSplash);
        assert_ne!(app.boot.phase(), BootPhase::Splash);
        assert!(app.layout_dirty);
    }

    #[test]
    fn finishing_onboarding_is_persisted() {
        let mut app = app(first_run_config());
        for _ in 0..3 {
            app.dispatch(Command::AdvanceOnboarding);
        }
        assert!(app.boot.is_ready());

        let store = app.persist.shutdown().unwrap();
        assert_eq!(
            store.get_setting(ONBOARDING_COMPLETED_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn launch_without_window_still_persists() {
        let mut app = app(IsolixConfig::default());
        app.dispatch(Command::LaunchPanel {
            title: "Docs".into(),
            url: "docs.rs".into(),
        });
        assert_eq!(app.state.panels().len(), 2);

        let store = app.persist.shutdown().unwrap();
        let active = store.active_workspace().unwrap().unwrap();
        assert_eq!(active.panels.len(), 2);
        assert_eq!(active.panels[1].url, "https://docs.rs");
    }
}
