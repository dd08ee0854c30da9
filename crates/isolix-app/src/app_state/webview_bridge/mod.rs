//! Bridge between the state reducer and the webviews.
//!
//! Handles the chrome page, panel view lifecycle keyed by isolation key,
//! IPC dispatch, and keeping view bounds in step with the strip layout.

mod bounds;
mod chrome;
mod events;
mod ipc_dispatch;
mod lifecycle;

pub(super) use bounds::strip_area;
