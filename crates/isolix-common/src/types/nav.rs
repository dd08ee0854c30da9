use serde::{Deserialize, Serialize};

/// Live navigation state of one panel's embedded view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStatus {
    /// URL currently displayed, which may differ from the stored one.
    pub url: String,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
