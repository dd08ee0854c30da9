//! Workspace and panel persistence.
//!
//! [`WorkspaceStore`] is the collaborator surface the shell writes through.
//! [`SqliteStore`] keeps everything in a single database file;
//! [`MemoryStore`] stands in when that file cannot be opened.

pub mod bootstrap;
pub mod memory;
pub mod ops;
pub mod sqlite;
pub mod store;


pub use bootstrap::{bootstrap, load_session, Session};
pub use memory::MemoryStore;
pub use ops::StoreOp;
pub use sqlite::SqliteStore;
pub use store::{WorkspaceStore, HOVER_DELAY_KEY, ONBOARDING_COMPLETED_KEY};
