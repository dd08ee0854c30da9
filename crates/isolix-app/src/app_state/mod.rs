//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the state reducer, the chrome page, panel
//! webviews, boot phases, and the persistence worker.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;
mod types;
mod ui_state;
mod webview_bridge;

pub use core::IsolixApp;
