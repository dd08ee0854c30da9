//! Store mutations as values, so the event loop can hand them to a worker.

use isolix_common::{Panel, PanelId, StoreError, WorkspaceId};

use crate::store::WorkspaceStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreOp {
    CreateWorkspace { id: WorkspaceId, name: String },
    RenameWorkspace { id: WorkspaceId, name: String },
    DeleteWorkspace(WorkspaceId),
    SetActiveWorkspace(WorkspaceId),
    CreatePanel { workspace_id: WorkspaceId, panel: Panel },
    UpdatePanel { id: PanelId, title: String, url: String },
    DeletePanel(PanelId),
    UpdatePanelPositions(Vec<(PanelId, u32)>),
    SetSetting { key: String, value: String },
}

impl StoreOp {
    pub fn name(&self) -> &'static str {
        match self {
            StoreOp::CreateWorkspace { .. } => "create_workspace",
            StoreOp::RenameWorkspace { .. } => "rename_workspace",
            StoreOp::DeleteWorkspace(_) => "delete_workspace",
            StoreOp::SetActiveWorkspace(_) => "set_active_workspace",
            StoreOp::CreatePanel { .. } => "create_panel",
            StoreOp::UpdatePanel { .. } => "update_panel",
            StoreOp::DeletePanel(_) => "delete_panel",
            StoreOp::UpdatePanelPositions(_) => "update_panel_positions",
            StoreOp::SetSetting { .. } => "set_setting",
        }
    }

    /// Run this mutation against `store`.
    pub fn apply(&self, store: &mut dyn WorkspaceStore) -> Result<(), StoreError> {
        match self {
            StoreOp::CreateWorkspace { id, name } => store.create_workspace(id, name),
            StoreOp::RenameWorkspace { id, name } => store.rename_workspace(id, name),
            StoreOp::DeleteWorkspace(id) => store.delete_workspace(id),
            StoreOp::SetActiveWorkspace(id) => store.set_active_workspace(id),
            StoreOp::CreatePanel {
                workspace_id,
                panel,
            } => store.create_panel(workspace_id, panel),
            StoreOp::UpdatePanel { id, title, url } => store.update_panel(id, title, url),
            StoreOp::DeletePanel(id) => store.delete_panel(id),
            StoreOp::UpdatePanelPositions(updates) => store.update_panel_positions(updates),
            StoreOp::SetSetting { key, value } => store.set_setting(key, value),
        }
    }
}
