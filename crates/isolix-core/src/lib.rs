//! Shell logic without any UI: the input router, the application state
//! container, and the reducer that turns commands into effects.

pub mod effect;
pub mod router;
pub mod snapshot;
pub mod state;

pub use effect::{BootSignal, Effect, WindowSignal};
pub use router::InputRouter;
pub use snapshot::{ChromeSnapshot, PanelView, WorkspaceSummary};
pub use state::{layout_engine_from, AppState, Viewport};
