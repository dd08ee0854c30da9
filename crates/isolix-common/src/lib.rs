pub mod actions;
pub mod catalog;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::{Command, HistoryStep};
pub use errors::{ConfigError, InjectError, IsolixError, StoreError};
pub use id::{epoch_millis, IdGenerator};
pub use types::{
    capitalize, normalize_url, ColorTag, IsolationKey, LaunchDecision, NavStatus, Panel, PanelId,
    Rect, RouteOutcome, RoutingDecision, Workspace, WorkspaceId,
};

pub type Result<T> = std::result::Result<T, IsolixError>;
