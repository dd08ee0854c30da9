//! Serializable view of [`AppState`] pushed to the chrome webview.

use isolix_common::{ColorTag, PanelId, Rect, WorkspaceId};
use isolix_layout::{LayoutMode, WidthClass};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceSummary {
    pub id: WorkspaceId,
    pub name: String,
    pub panel_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub id: PanelId,
    pub title: String,
    /// Stored URL of the panel.
    pub url: String,
    /// What the page is showing right now, for the URL field.
    pub display_url: String,
    pub color: ColorTag,
    pub color_hex: &'static str,
    pub width: WidthClass,
    pub rect: Rect,
    pub hovered: bool,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeSnapshot {
    pub workspaces: Vec<WorkspaceSummary>,
    pub active_workspace: WorkspaceId,
    pub panels: Vec<PanelView>,
    pub hovered: Option<PanelId>,
    pub layout_mode: LayoutMode,
    pub content_width: f64,
    pub scroll_offset: f64,
    pub broadcast_input: String,
    pub add_dialog_open: bool,
    pub library_open: bool,
    pub hover_delay_ms: u64,
    pub default_launch_url: String,
}

impl ChromeSnapshot {
    pub fn capture(state: &AppState) -> Self {
        let strip = state.strip_layout();
        let count = state.panels().len();
        let hovered = state.hovered();
        let engine = state.layout_engine();

        let panels = state
            .panels()
            .iter()
            .map(|panel| {
                let nav = state.nav_status(&panel.id);
                PanelView {
                    id: panel.id.clone(),
                    title: panel.title.clone(),
                    url: panel.url.clone(),
                    display_url: nav
                        .filter(|n| !n.url.is_empty())
                        .map(|n| n.url.clone())
                        .unwrap_or_else(|| panel.url.clone()),
                    color: panel.color,
                    color_hex: panel.color.hex(),
                    width: engine.width_class(&panel.id, count, hovered),
                    rect: strip.rect_of(&panel.id).unwrap_or_default(),
                    hovered: hovered == Some(&panel.id),
                    loading: nav.is_some_and(|n| n.loading),
                    can_go_back: nav.is_some_and(|n| n.can_go_back),
                    can_go_forward: nav.is_some_and(|n| n.can_go_forward),
                }
            })
            .collect();

        Self {
            workspaces: state
                .workspaces()
                .iter()
                .map(|w| WorkspaceSummary {
                    id: w.id.clone(),
                    name: w.name.clone(),
                    panel_count: w.panels.len(),
                })
                .collect(),
            active_workspace: state.active_id().clone(),
            panels,
            hovered: hovered.cloned(),
            layout_mode: strip.mode,
            content_width: strip.content_width,
            scroll_offset: state.scroll_offset(),
            broadcast_input: state.broadcast_input().to_string(),
            add_dialog_open: state.add_dialog_open(),
            library_open: state.library_open(),
            hover_delay_ms: state.hover_delay().as_millis() as u64,
            default_launch_url: state.default_launch_url().to_string(),
        }
    }
}
