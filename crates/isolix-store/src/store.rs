use isolix_common::{Panel, PanelId, StoreError, Workspace, WorkspaceId};

/// Setting holding the hover debounce in milliseconds.
pub const HOVER_DELAY_KEY: &str = "hoverDelay";

/// Setting written once the onboarding walkthrough has been finished.
pub const ONBOARDING_COMPLETED_KEY: &str = "isolix_onboarding_completed";

/// CRUD surface for workspaces, panels, and string settings.
///
/// Workspaces come back with their panels loaded, ordered by position.
/// Every call may fail; callers log and carry on.
pub trait WorkspaceStore: Send {
    /// All workspaces in creation order.
    fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError>;

    /// The workspace flagged active, if any.
    fn active_workspace(&self) -> Result<Option<Workspace>, StoreError>;

    fn list_panels(&self, workspace_id: &WorkspaceId) -> Result<Vec<Panel>, StoreError>;

    /// Insert a workspace and make it the active one.
    fn create_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError>;

    fn rename_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError>;

    /// Delete a workspace together with its panels.
    fn delete_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError>;

    fn set_active_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError>;

    fn create_panel(&mut self, workspace_id: &WorkspaceId, panel: &Panel)
        -> Result<(), StoreError>;

    fn update_panel(&mut self, id: &PanelId, title: &str, url: &str) -> Result<(), StoreError>;

    fn delete_panel(&mut self, id: &PanelId) -> Result<(), StoreError>;

    /// Rewrite positions in one step; either all rows change or none do.
    fn update_panel_positions(&mut self, updates: &[(PanelId, u32)]) -> Result<(), StoreError>;

    fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_setting(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Short name for log lines.
    fn backend(&self) -> &'static str;
}
