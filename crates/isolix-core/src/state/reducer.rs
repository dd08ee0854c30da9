//! Command dispatch.

use std::time::{Duration, Instant};

use isolix_common::{Command, RouteOutcome};
use isolix_config::schema::MAX_HOVER_DELAY_MS;
use isolix_layout::LayoutMode;
use isolix_store::{StoreOp, HOVER_DELAY_KEY};

use super::{hover_effects, AppState};
use crate::effect::{BootSignal, Effect, WindowSignal};

impl AppState {
    /// Apply one command and return the effects the event loop must carry out.
    ///
    /// `now` drives the hover debounce so tests can control time.
    pub fn apply(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        if !command.is_pointer() {
            tracing::debug!(command = command.label(), "apply");
        }

        match command {
            // -- Hover --
            Command::Hover(id) => {
                if self.panel(&id).is_none() {
                    return Vec::new();
                }
                hover_effects(self.hover.enter(id, now))
            }
            Command::Unhover(id) => hover_effects(self.hover.leave(&id)),

            // -- Broadcast --
            Command::SetBroadcastInput(text) => {
                self.broadcast_input = text;
                Vec::new()
            }
            Command::Submit(text) => self.submit(&text),

            // -- Panels --
            Command::Reorder { from, to } => self.reorder(from, to),
            Command::ReorderById { dragged, target } => {
                let panels = self.panels();
                let from = panels.iter().position(|p| p.id == dragged);
                let to = panels.iter().position(|p| p.id == target);
                match (from, to) {
                    (Some(from), Some(to)) => self.reorder(from, to),
                    _ => Vec::new(),
                }
            }
            Command::LaunchPanel { title, url } => self.launch_panel(&title, &url),
            Command::RemovePanel(id) => self.remove_panel(&id),
            Command::RenamePanel { id, title } => self.rename_panel(&id, &title),
            Command::NavigatePanel { id, url } => self.navigate_panel(&id, &url),
            Command::PageTitleChanged { id, title } => self.page_title_changed(&id, &title),
            Command::PanelHistory { id, step } => match self.panel(&id) {
                Some(panel) => vec![Effect::ViewHistory {
                    key: panel.isolation_key.clone(),
                    step,
                }],
                None => Vec::new(),
            },
            Command::ViewStatus { id, status } => {
                if self.nav.get(&id) == Some(&status) {
                    return Vec::new();
                }
                self.nav.insert(id, status);
                vec![Effect::RefreshChrome]
            }

            // -- Workspaces --
            Command::CreateWorkspace => self.create_workspace(),
            Command::RenameWorkspace { id, name } => self.rename_workspace(&id, &name),
            Command::DeleteWorkspace(id) => self.delete_workspace(&id),
            Command::SwitchWorkspace(id) => self.switch_workspace(&id),

            // -- Settings --
            Command::SetHoverDelay(ms) => {
                let ms = ms.min(MAX_HOVER_DELAY_MS);
                self.hover.set_delay(Duration::from_millis(ms));
                vec![
                    Effect::Persist(StoreOp::SetSetting {
                        key: HOVER_DELAY_KEY.to_string(),
                        value: ms.to_string(),
                    }),
                    Effect::RefreshChrome,
                ]
            }

            // -- Dialogs --
            Command::OpenAddDialog => self.set_modals(true, false),
            Command::CloseAddDialog => self.set_modals(false, self.library_open),
            Command::ConfirmAddDialog { title, url } => {
                if title.trim().is_empty() {
                    return Vec::new();
                }
                let mut effects = self.set_modals(false, false);
                effects.extend(self.launch_panel(&title, &url));
                effects
            }
            Command::OpenLibrary => self.set_modals(false, true),
            Command::CloseLibrary => self.set_modals(self.add_dialog_open, false),

            // -- Viewport --
            Command::Scroll(delta) => {
                if self.strip_layout().mode != LayoutMode::Scroll {
                    return Vec::new();
                }
                let before = self.scroll_offset;
                self.scroll_offset += delta;
                self.clamp_scroll();
                if self.scroll_offset == before {
                    Vec::new()
                } else {
                    vec![Effect::Relayout, Effect::RefreshChrome]
                }
            }

            // -- Window --
            Command::Minimize => vec![Effect::Window(WindowSignal::Minimize)],
            Command::ToggleMaximize => vec![Effect::Window(WindowSignal::ToggleMaximize)],
            Command::Close => vec![Effect::Window(WindowSignal::Close)],

            // -- Boot --
            Command::SkipSplash => vec![Effect::Boot(BootSignal::SkipSplash)],
            Command::AdvanceOnboarding => vec![Effect::Boot(BootSignal::AdvanceOnboarding)],
        }
    }

    fn submit(&mut self, text: &str) -> Vec<Effect> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.broadcast_input.clear();

        let mut effects = match self.router.route(text, self.panels()) {
            Some(RouteOutcome::Launch(launch)) => self.launch_panel(&launch.title, &launch.url),
            Some(RouteOutcome::Broadcast(decision)) => vec![Effect::Broadcast(decision)],
            None => Vec::new(),
        };
        effects.push(Effect::ClearBroadcastInput);
        effects
    }

    fn set_modals(&mut self, add_dialog: bool, library: bool) -> Vec<Effect> {
        if self.add_dialog_open == add_dialog && self.library_open == library {
            return Vec::new();
        }
        self.add_dialog_open = add_dialog;
        self.library_open = library;
        vec![Effect::Relayout, Effect::RefreshChrome]
    }
}
