//! First-run seeding and session loading.

use isolix_common::{ColorTag, IdGenerator, Panel, PanelId, StoreError, Workspace, WorkspaceId};
use tracing::{info, warn};

use crate::store::{WorkspaceStore, HOVER_DELAY_KEY, ONBOARDING_COMPLETED_KEY};

pub const DEFAULT_WORKSPACE_NAME: &str = "Default Workspace";
pub const DEFAULT_PANEL_TITLE: &str = "Google";
pub const DEFAULT_PANEL_URL: &str = "https://www.google.com";

/// Everything the shell needs from the store at startup.
#[derive(Debug, Clone)]
pub struct Session {
    pub workspaces: Vec<Workspace>,
    pub active: WorkspaceId,
    /// Stored hover debounce, overriding the config default.
    pub hover_delay_ms: Option<u64>,
    pub onboarding_completed: bool,
}

/// Seed an empty store with one active workspace holding one panel.
///
/// Returns `true` if anything was created.
pub fn bootstrap(store: &mut dyn WorkspaceStore, ids: &mut IdGenerator) -> Result<bool, StoreError> {
    if !store.list_workspaces()?.is_empty() {
        return Ok(false);
    }

    let workspace_id = WorkspaceId::new(ids.next("w"));
    store.create_workspace(&workspace_id, DEFAULT_WORKSPACE_NAME)?;

    let panel = Panel::new(
        PanelId::new(ids.next("p")),
        DEFAULT_PANEL_TITLE,
        DEFAULT_PANEL_URL,
        ColorTag::Blue,
        0,
    );
    store.create_panel(&workspace_id, &panel)?;

    info!(backend = store.backend(), workspace_id = %workspace_id, "seeded default workspace");
    Ok(true)
}

/// Bootstrap if needed, then read workspaces, the active selection, and
/// the settings the shell cares about.
///
/// A store with no active flag gets its first workspace activated.
pub fn load_session(
    store: &mut dyn WorkspaceStore,
    ids: &mut IdGenerator,
) -> Result<Session, StoreError> {
    bootstrap(store, ids)?;

    let workspaces = store.list_workspaces()?;
    let active = match store.active_workspace()? {
        Some(ws) => ws.id,
        None => {
            let first = workspaces
                .first()
                .map(|w| w.id.clone())
                .ok_or_else(|| StoreError::NotFound("no workspaces after bootstrap".into()))?;
            store.set_active_workspace(&first)?;
            first
        }
    };

    let hover_delay_ms = match store.get_setting(HOVER_DELAY_KEY)? {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring unparsable hover delay setting");
                None
            }
        },
        None => None,
    };

    let onboarding_completed = store
        .get_setting(ONBOARDING_COMPLETED_KEY)?
        .is_some_and(|v| v == "true");

    Ok(Session {
        workspaces,
        active,
        hover_delay_ms,
        onboarding_completed,
    })
}
