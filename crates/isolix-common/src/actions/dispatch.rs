use super::{Command, HistoryStep};

impl Command {
    /// Short name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Hover(_) => "Hover",
            Command::Unhover(_) => "Unhover",
            Command::SetBroadcastInput(_) => "Set Broadcast Input",
            Command::Submit(_) => "Submit",
            Command::Reorder { .. } => "Reorder",
            Command::ReorderById { .. } => "Reorder",
            Command::LaunchPanel { .. } => "Launch Panel",
            Command::RemovePanel(_) => "Remove Panel",
            Command::RenamePanel { .. } => "Rename Panel",
            Command::NavigatePanel { .. } => "Navigate Panel",
            Command::PageTitleChanged { .. } => "Page Title Changed",
            Command::PanelHistory {
                step: HistoryStep::Back,
                ..
            } => "Back",
            Command::PanelHistory {
                step: HistoryStep::Forward,
                ..
            } => "Forward",
            Command::PanelHistory {
                step: HistoryStep::Reload,
                ..
            } => "Reload",
            Command::ViewStatus { .. } => "View Status",
            Command::CreateWorkspace => "New Workspace",
            Command::RenameWorkspace { .. } => "Rename Workspace",
            Command::DeleteWorkspace(_) => "Delete Workspace",
            Command::SwitchWorkspace(_) => "Switch Workspace",
            Command::SetHoverDelay(_) => "Set Hover Delay",
            Command::OpenAddDialog => "Add Panel",
            Command::CloseAddDialog => "Close Add Panel",
            Command::ConfirmAddDialog { .. } => "Confirm Add Panel",
            Command::OpenLibrary => "App Library",
            Command::CloseLibrary => "Close App Library",
            Command::Scroll(_) => "Scroll",
            Command::Minimize => "Minimize",
            Command::ToggleMaximize => "Toggle Maximize",
            Command::Close => "Close",
            Command::SkipSplash => "Skip Splash",
            Command::AdvanceOnboarding => "Next",
        }
    }

    /// Pointer traffic is high-volume and logged at trace level.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Command::Hover(_) | Command::Unhover(_) | Command::Scroll(_) | Command::ViewStatus { .. }
        )
    }
}
