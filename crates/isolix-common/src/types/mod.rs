mod core;
mod nav;
mod panel;
mod routing;

pub use self::core::*;
pub use nav::*;
pub use panel::*;
pub use routing::*;
