use serde::{Deserialize, Serialize};

use super::panel::Panel;

/// Where a broadcast goes and what it says.
///
/// `targets` is never empty when produced by the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub targets: Vec<Panel>,
    pub payload: String,
    /// True when the targets came from matched `@name` mentions.
    pub directed: bool,
}

/// A service shortcut resolved to a new panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDecision {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteOutcome {
    Launch(LaunchDecision),
    Broadcast(RoutingDecision),
}
