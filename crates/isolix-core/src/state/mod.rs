//! Explicit application state.
//!
//! Hover, modal flags, the active workspace, and the broadcast draft all
//! live here and change only through [`AppState::apply`] and
//! [`AppState::tick`], which return the effects to perform.

mod panels;
mod reducer;
mod workspaces;


use std::collections::HashMap;
use std::time::{Duration, Instant};

use isolix_common::{IdGenerator, NavStatus, Panel, PanelId, Rect, Workspace, WorkspaceId};
use isolix_config::schema::{LayoutConfig, MAX_HOVER_DELAY_MS};
use isolix_config::IsolixConfig;
use isolix_layout::{clamp_scroll, HoverChange, HoverTracker, LayoutEngine, StripLayout};
use isolix_store::bootstrap::DEFAULT_WORKSPACE_NAME;
use isolix_store::Session;

use crate::effect::Effect;
use crate::router::InputRouter;

/// Strip geometry inputs supplied by the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Area the panel strip occupies.
    pub strip: Rect,
    /// Full window width; viewport-relative widths resolve against it.
    pub window_width: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            strip: Rect::new(0.0, 0.0, 1200.0, 800.0),
            window_width: 1400.0,
        }
    }
}

pub fn layout_engine_from(config: &LayoutConfig) -> LayoutEngine {
    LayoutEngine {
        gutter_px: config.gutter_px as f64,
        scroll_threshold: config.scroll_threshold as usize,
        hovered_vw: config.hovered_vw as f64,
        shrunk_vw: config.shrunk_vw as f64,
        hovered_flex: config.hovered_flex,
        gap: config.panel_gap as f64,
    }
}

pub struct AppState {
    workspaces: Vec<Workspace>,
    active: WorkspaceId,
    hover: HoverTracker,
    router: InputRouter,
    layout: LayoutEngine,
    ids: IdGenerator,
    nav: HashMap<PanelId, NavStatus>,
    viewport: Viewport,
    scroll_offset: f64,
    broadcast_input: String,
    add_dialog_open: bool,
    library_open: bool,
    default_launch_url: String,
}

impl AppState {
    /// Build the state from config defaults and what the store loaded.
    ///
    /// A stored hover delay overrides the configured one.
    pub fn new(config: &IsolixConfig, session: Session) -> Self {
        let delay_ms = session
            .hover_delay_ms
            .unwrap_or(config.hover.delay_ms)
            .min(MAX_HOVER_DELAY_MS);

        let mut ids = IdGenerator::new();
        let mut workspaces = session.workspaces;
        let mut active = session.active;
        if workspaces.is_empty() {
            let id = WorkspaceId::new(ids.next("w"));
            workspaces.push(Workspace::new(id.clone(), DEFAULT_WORKSPACE_NAME));
            active = id;
        } else if !workspaces.iter().any(|w| w.id == active) {
            active = workspaces[0].id.clone();
        }

        Self {
            workspaces,
            active,
            hover: HoverTracker::new(Duration::from_millis(delay_ms)),
            router: InputRouter::new(config.broadcast.shortcuts.clone()),
            layout: layout_engine_from(&config.layout),
            ids,
            nav: HashMap::new(),
            viewport: Viewport::default(),
            scroll_offset: 0.0,
            broadcast_input: String::new(),
            add_dialog_open: false,
            library_open: false,
            default_launch_url: config.broadcast.default_launch_url.clone(),
        }
    }

    // ===== Accessors =====

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn active_id(&self) -> &WorkspaceId {
        &self.active
    }

    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == self.active)
    }

    pub(crate) fn active_workspace_mut(&mut self) -> Option<&mut Workspace> {
        let active = self.active.clone();
        self.workspaces.iter_mut().find(|w| w.id == active)
    }

    /// Panels of the active workspace, in strip order.
    pub fn panels(&self) -> &[Panel] {
        self.active_workspace()
            .map(|w| w.panels.as_slice())
            .unwrap_or(&[])
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels().iter().find(|p| &p.id == id)
    }

    pub fn hovered(&self) -> Option<&PanelId> {
        self.hover.hovered()
    }

    pub fn hover_delay(&self) -> Duration {
        self.hover.delay()
    }

    pub fn broadcast_input(&self) -> &str {
        &self.broadcast_input
    }

    pub fn add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn library_open(&self) -> bool {
        self.library_open
    }

    /// Native panel views sit above the chrome, so they hide while a modal is up.
    pub fn panels_visible(&self) -> bool {
        !self.add_dialog_open && !self.library_open
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn nav_status(&self, id: &PanelId) -> Option<&NavStatus> {
        self.nav.get(id)
    }

    pub fn default_launch_url(&self) -> &str {
        &self.default_launch_url
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ===== Geometry =====

    /// Pixel placement of the active workspace's panels.
    pub fn strip_layout(&self) -> StripLayout {
        let ids: Vec<PanelId> = self.panels().iter().map(|p| p.id.clone()).collect();
        self.layout.compute(
            &ids,
            self.hover.hovered(),
            self.viewport.strip,
            self.viewport.window_width,
            self.scroll_offset,
        )
    }

    /// The window resized or the chrome reserved a different strip area.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<Effect> {
        if viewport == self.viewport {
            return Vec::new();
        }
        self.viewport = viewport;
        self.clamp_scroll();
        vec![Effect::Relayout]
    }

    pub(crate) fn clamp_scroll(&mut self) {
        let content = self.strip_layout().content_width;
        self.scroll_offset = clamp_scroll(self.scroll_offset, content, self.viewport.strip.width);
    }

    pub(crate) fn scroll_to_end(&mut self) {
        self.scroll_offset = f64::MAX;
        self.clamp_scroll();
    }

    // ===== Timers =====

    /// Fire the hover timer if due.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        hover_effects(self.hover.poll(now))
    }

    /// When the event loop must wake next, if a timer is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hover.next_deadline()
    }
}

pub(crate) fn hover_effects(change: HoverChange) -> Vec<Effect> {
    match change {
        HoverChange::None => Vec::new(),
        HoverChange::Hovered(_) => vec![Effect::Relayout, Effect::RefreshChrome],
    }
}
