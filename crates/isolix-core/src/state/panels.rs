//! Panel lifecycle handlers.

use isolix_common::{normalize_url, ColorTag, Panel, PanelId};
use isolix_layout::splice_move;
use isolix_store::StoreOp;
use rand::seq::SliceRandom;

use super::AppState;
use crate::effect::Effect;

impl AppState {
    pub(crate) fn launch_panel(&mut self, title: &str, url: &str) -> Vec<Effect> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("launch ignored: blank title");
            return Vec::new();
        }
        let url = if url.trim().is_empty() {
            self.default_launch_url.clone()
        } else {
            normalize_url(url)
        };

        let id = PanelId::new(self.ids.next("p"));
        let color = ColorTag::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        let workspace_id = self.active.clone();
        let Some(workspace) = self.active_workspace_mut() else {
            return Vec::new();
        };
        let panel = Panel::new(id, title, url, color, workspace.panels.len() as u32);
        tracing::info!(panel_id = %panel.id, url = %panel.url, "panel launched");
        workspace.panels.push(panel.clone());
        self.scroll_to_end();

        vec![
            Effect::Persist(StoreOp::CreatePanel {
                workspace_id,
                panel,
            }),
            Effect::SyncViews,
            Effect::Relayout,
            Effect::RefreshChrome,
        ]
    }

    pub(crate) fn remove_panel(&mut self, id: &PanelId) -> Vec<Effect> {
        let Some(workspace) = self.active_workspace_mut() else {
            return Vec::new();
        };
        let Some(index) = workspace.index_of(id) else {
            return Vec::new();
        };
        workspace.panels.remove(index);
        workspace.reindex();
        let positions = workspace.positions();

        self.nav.remove(id);
        self.hover.forget(id);
        self.clamp_scroll();

        let mut effects = vec![Effect::Persist(StoreOp::DeletePanel(id.clone()))];
        if !positions.is_empty() {
            effects.push(Effect::Persist(StoreOp::UpdatePanelPositions(positions)));
        }
        effects.extend([Effect::SyncViews, Effect::Relayout, Effect::RefreshChrome]);
        effects
    }

    pub(crate) fn rename_panel(&mut self, id: &PanelId, title: &str) -> Vec<Effect> {
        let title = title.trim();
        if title.is_empty() {
            return Vec::new();
        }
        let Some(panel) = self.active_workspace_mut().and_then(|w| w.panel_mut(id)) else {
            return Vec::new();
        };
        if panel.title == title {
            return Vec::new();
        }
        panel.title = title.to_string();
        vec![Self::persist_panel(panel), Effect::RefreshChrome]
    }

    pub(crate) fn navigate_panel(&mut self, id: &PanelId, url: &str) -> Vec<Effect> {
        if url.trim().is_empty() {
            return Vec::new();
        }
        let url = normalize_url(url);
        let Some(panel) = self.active_workspace_mut().and_then(|w| w.panel_mut(id)) else {
            return Vec::new();
        };
        panel.url = url.clone();
        let key = panel.isolation_key.clone();
        vec![
            Self::persist_panel(panel),
            Effect::NavigateView { key, url },
            Effect::RefreshChrome,
        ]
    }

    /// Title reported by the embedded page. Only a non-empty, changed title sticks.
    pub(crate) fn page_title_changed(&mut self, id: &PanelId, title: &str) -> Vec<Effect> {
        if title.is_empty() {
            return Vec::new();
        }
        // Pages in background workspaces are not loaded, so only the active one matters.
        let Some(panel) = self.active_workspace_mut().and_then(|w| w.panel_mut(id)) else {
            return Vec::new();
        };
        if panel.title == title {
            return Vec::new();
        }
        panel.title = title.to_string();
        vec![Self::persist_panel(panel), Effect::RefreshChrome]
    }

    /// Move the panel at `from` so it lands at index `to`.
    ///
    /// `to` is the target's index before the dragged panel is taken out.
    pub(crate) fn reorder(&mut self, from: usize, to: usize) -> Vec<Effect> {
        let Some(workspace) = self.active_workspace_mut() else {
            return Vec::new();
        };
        if !splice_move(&mut workspace.panels, from, to) {
            return Vec::new();
        }
        workspace.reindex();
        let positions = workspace.positions();
        vec![
            Effect::Persist(StoreOp::UpdatePanelPositions(positions)),
            Effect::Relayout,
            Effect::RefreshChrome,
        ]
    }

    fn persist_panel(panel: &Panel) -> Effect {
        Effect::Persist(StoreOp::UpdatePanel {
            id: panel.id.clone(),
            title: panel.title.clone(),
            url: panel.url.clone(),
        })
    }
}
