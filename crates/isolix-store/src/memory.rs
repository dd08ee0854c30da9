//! Session-only store used when the database is unavailable or disabled.

use std::collections::HashMap;

use isolix_common::{Panel, PanelId, StoreError, Workspace, WorkspaceId};

use crate::store::WorkspaceStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Creation order is preserved by the vector.
    workspaces: Vec<Workspace>,
    active: Option<WorkspaceId>,
    settings: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn workspace_mut(&mut self, id: &WorkspaceId) -> Result<&mut Workspace, StoreError> {
        self.workspaces
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("workspace {id}")))
    }

    fn sorted(mut workspace: Workspace) -> Workspace {
        workspace.panels.sort_by_key(|p| p.position);
        workspace
    }
}

impl WorkspaceStore for MemoryStore {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError> {
        Ok(self.workspaces.iter().cloned().map(Self::sorted).collect())
    }

    fn active_workspace(&self) -> Result<Option<Workspace>, StoreError> {
        Ok(self
            .active
            .as_ref()
            .and_then(|id| self.workspaces.iter().find(|w| &w.id == id))
            .cloned()
            .map(Self::sorted))
    }

    fn list_panels(&self, workspace_id: &WorkspaceId) -> Result<Vec<Panel>, StoreError> {
        Ok(self
            .workspaces
            .iter()
            .find(|w| &w.id == workspace_id)
            .map(|w| Self::sorted(w.clone()).panels)
            .unwrap_or_default())
    }

    fn create_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("workspace name is required".into()));
        }
        if self.workspaces.iter().any(|w| &w.id == id) {
            return Err(StoreError::Validation(format!("workspace {id} already exists")));
        }
        self.workspaces.push(Workspace::new(id.clone(), name));
        self.active = Some(id.clone());
        Ok(())
    }

    fn rename_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("workspace name is required".into()));
        }
        self.workspace_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn delete_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError> {
        if self.workspaces.len() <= 1 {
            return Err(StoreError::LastWorkspace);
        }
        let before = self.workspaces.len();
        self.workspaces.retain(|w| &w.id != id);
        if self.workspaces.len() == before {
            return Err(StoreError::NotFound(format!("workspace {id}")));
        }
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    fn set_active_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError> {
        self.workspace_mut(id)?;
        self.active = Some(id.clone());
        Ok(())
    }

    fn create_panel(
        &mut self,
        workspace_id: &WorkspaceId,
        panel: &Panel,
    ) -> Result<(), StoreError> {
        if panel.title.trim().is_empty() {
            return Err(StoreError::Validation("panel title is required".into()));
        }
        self.workspace_mut(workspace_id)?.panels.push(panel.clone());
        Ok(())
    }

    fn update_panel(&mut self, id: &PanelId, title: &str, url: &str) -> Result<(), StoreError> {
        let panel = self
            .workspaces
            .iter_mut()
            .find_map(|w| w.panel_mut(id))
            .ok_or_else(|| StoreError::NotFound(format!("panel {id}")))?;
        panel.title = title.to_string();
        panel.url = url.to_string();
        Ok(())
    }

    fn delete_panel(&mut self, id: &PanelId) -> Result<(), StoreError> {
        for workspace in &mut self.workspaces {
            if let Some(index) = workspace.index_of(id) {
                workspace.panels.remove(index);
                return Ok(());
            }
        }
        Err(StoreError::NotFound(format!("panel {id}")))
    }

    fn update_panel_positions(&mut self, updates: &[(PanelId, u32)]) -> Result<(), StoreError> {
        // Check every id first so a bad batch changes nothing.
        for (id, _) in updates {
            if !self.workspaces.iter().any(|w| w.panel(id).is_some()) {
                return Err(StoreError::NotFound(format!("panel {id}")));
            }
        }
        for (id, position) in updates {
            if let Some(panel) = self.workspaces.iter_mut().find_map(|w| w.panel_mut(id)) {
                panel.position = *position;
            }
        }
        Ok(())
    }

    fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.settings.get(key).cloned())
    }

    fn set_setting(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.settings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
