//! Side effects requested by the state reducer.
//!
//! The reducer never touches the store, the webviews, or the window. It
//! returns these values and the event loop carries them out.

use isolix_common::{HistoryStep, IsolationKey, RoutingDecision};
use isolix_store::StoreOp;

/// Window-chrome request. No reply is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSignal {
    Minimize,
    ToggleMaximize,
    Close,
}

/// Startup sequence request forwarded to the boot controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSignal {
    SkipSplash,
    AdvanceOnboarding,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write through to the store, fire-and-forget.
    Persist(StoreOp),
    /// Inject the payload into every target panel.
    Broadcast(RoutingDecision),
    /// Create or destroy panel views to match the active workspace.
    SyncViews,
    /// Panel geometry or visibility changed.
    Relayout,
    NavigateView { key: IsolationKey, url: String },
    ViewHistory { key: IsolationKey, step: HistoryStep },
    /// Empty the broadcast bar in the chrome.
    ClearBroadcastInput,
    /// Push a fresh state snapshot to the chrome.
    RefreshChrome,
    Window(WindowSignal),
    Boot(BootSignal),
}

impl Effect {
    pub fn is_persist(&self) -> bool {
        matches!(self, Effect::Persist(_))
    }
}
