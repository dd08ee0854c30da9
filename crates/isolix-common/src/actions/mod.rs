use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Session-history step on one panel's embedded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStep {
    Back,
    Forward,
    Reload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PanelId, WorkspaceId};

    #[test]
    fn labels_not_empty() {
        let commands = vec![
            Command::Hover(PanelId::from("p1")),
            Command::Unhover(PanelId::from("p1")),
            Command::Submit("hi".into()),
            Command::Reorder { from: 0, to: 2 },
            Command::CreateWorkspace,
            Command::DeleteWorkspace(WorkspaceId::from("w1")),
            Command::Scroll(40.0),
            Command::Close,
        ];
        for command in commands {
            assert!(!command.label().is_empty(), "{command:?} has empty label");
        }
    }

    #[test]
    fn history_labels() {
        let id = PanelId::from("p1");
        let back = Command::PanelHistory {
            id: id.clone(),
            step: HistoryStep::Back,
        };
        let reload = Command::PanelHistory {
            id,
            step: HistoryStep::Reload,
        };
        assert_eq!(back.label(), "Back");
        assert_eq!(reload.label(), "Reload");
    }

    #[test]
    fn pointer_commands() {
        assert!(Command::Unhover(PanelId::from("p1")).is_pointer());
        assert!(Command::Hover(PanelId::from("p1")).is_pointer());
        assert!(!Command::Submit("x".into()).is_pointer());
    }

    #[test]
    fn command_json_shape() {
        let json = r#"{"type":"reorder_by_id","data":{"dragged":"p1","target":"p2"}}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::ReorderById {
                dragged: PanelId::from("p1"),
                target: PanelId::from("p2"),
            }
        );

        let json = serde_json::to_string(&Command::CreateWorkspace).unwrap();
        assert!(json.contains("\"create_workspace\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Command::CreateWorkspace);
    }

    #[test]
    fn unhover_names_its_panel() {
        let cmd: Command = serde_json::from_str(r#"{"type":"unhover","data":"p3"}"#).unwrap();
        assert_eq!(cmd, Command::Unhover(PanelId::from("p3")));
        assert!(serde_json::from_str::<Command>(r#"{"type":"unhover"}"#).is_err());
    }

    #[test]
    fn history_step_serde() {
        let step: HistoryStep = serde_json::from_str("\"forward\"").unwrap();
        assert_eq!(step, HistoryStep::Forward);
    }
}
