//! Workspace handlers.

use isolix_common::{Workspace, WorkspaceId};
use isolix_store::StoreOp;

use super::AppState;
use crate::effect::Effect;

impl AppState {
    pub(crate) fn create_workspace(&mut self) -> Vec<Effect> {
        let id = WorkspaceId::new(self.ids.next("w"));
        let name = format!("Workspace {}", self.workspaces.len() + 1);
        tracing::info!(workspace_id = %id, name = %name, "workspace created");
        self.workspaces.push(Workspace::new(id.clone(), name.clone()));

        // The store marks a new workspace active on its own.
        let mut effects = vec![Effect::Persist(StoreOp::CreateWorkspace {
            id: id.clone(),
            name,
        })];
        effects.extend(self.activate(id));
        effects
    }

    pub(crate) fn rename_workspace(&mut self, id: &WorkspaceId, name: &str) -> Vec<Effect> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }
        let Some(workspace) = self.workspaces.iter_mut().find(|w| &w.id == id) else {
            return Vec::new();
        };
        if workspace.name == name {
            return Vec::new();
        }
        workspace.name = name.to_string();
        vec![
            Effect::Persist(StoreOp::RenameWorkspace {
                id: id.clone(),
                name: name.to_string(),
            }),
            Effect::RefreshChrome,
        ]
    }

    pub(crate) fn delete_workspace(&mut self, id: &WorkspaceId) -> Vec<Effect> {
        if self.workspaces.len() <= 1 {
            tracing::warn!(workspace_id = %id, "refusing to delete the last workspace");
            return Vec::new();
        }
        let Some(index) = self.workspaces.iter().position(|w| &w.id == id) else {
            return Vec::new();
        };
        self.workspaces.remove(index);
        tracing::info!(workspace_id = %id, "workspace deleted");

        let mut effects = vec![Effect::Persist(StoreOp::DeleteWorkspace(id.clone()))];
        if &self.active == id {
            let first = self.workspaces[0].id.clone();
            effects.push(Effect::Persist(StoreOp::SetActiveWorkspace(first.clone())));
            effects.extend(self.activate(first));
        } else {
            effects.push(Effect::RefreshChrome);
        }
        effects
    }

    pub(crate) fn switch_workspace(&mut self, id: &WorkspaceId) -> Vec<Effect> {
        if &self.active == id || !self.workspaces.iter().any(|w| &w.id == id) {
            return Vec::new();
        }
        let mut effects = vec![Effect::Persist(StoreOp::SetActiveWorkspace(id.clone()))];
        effects.extend(self.activate(id.clone()));
        effects
    }

    /// Make `id` the visible workspace and drop per-view state of the old one.
    fn activate(&mut self, id: WorkspaceId) -> Vec<Effect> {
        self.active = id;
        self.hover.reset();
        self.nav.clear();
        self.scroll_offset = 0.0;
        vec![Effect::SyncViews, Effect::Relayout, Effect::RefreshChrome]
    }
}
