//! Panel strip geometry: width classes, pixel placement with horizontal
//! scrolling, hover debounce, and drag reordering.

pub mod hover;
pub mod layout;
pub mod order;

pub use hover::{HoverChange, HoverTracker};
pub use layout::{clamp_scroll, LayoutEngine, LayoutMode, StripLayout, WidthClass};
pub use order::splice_move;
