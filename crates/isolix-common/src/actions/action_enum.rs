use serde::{Deserialize, Serialize};

use super::HistoryStep;
use crate::types::{NavStatus, PanelId, WorkspaceId};

/// Every discrete input the shell reacts to.
///
/// Pointer events from panel pages, chrome IPC messages, and window-chrome
/// buttons all resolve to a `Command`. The state reducer matches on this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Command {
    // -- Hover --
    Hover(PanelId),
    /// Pointer left this panel. Ignored unless it is the pending or hovered one.
    Unhover(PanelId),

    // -- Broadcast --
    SetBroadcastInput(String),
    Submit(String),

    // -- Panels --
    Reorder {
        from: usize,
        to: usize,
    },
    ReorderById {
        dragged: PanelId,
        target: PanelId,
    },
    LaunchPanel {
        title: String,
        url: String,
    },
    RemovePanel(PanelId),
    RenamePanel {
        id: PanelId,
        title: String,
    },
    NavigatePanel {
        id: PanelId,
        url: String,
    },
    PageTitleChanged {
        id: PanelId,
        title: String,
    },
    PanelHistory {
        id: PanelId,
        step: HistoryStep,
    },
    ViewStatus {
        id: PanelId,
        status: NavStatus,
    },

    // -- Workspaces --
    CreateWorkspace,
    RenameWorkspace {
        id: WorkspaceId,
        name: String,
    },
    DeleteWorkspace(WorkspaceId),
    SwitchWorkspace(WorkspaceId),

    // -- Settings --
    SetHoverDelay(u64),

    // -- Dialogs --
    OpenAddDialog,
    CloseAddDialog,
    ConfirmAddDialog {
        title: String,
        url: String,
    },
    OpenLibrary,
    CloseLibrary,

    // -- Viewport --
    Scroll(f64),

    // -- Window --
    Minimize,
    ToggleMaximize,
    Close,

    // -- Boot --
    SkipSplash,
    AdvanceOnboarding,
}
