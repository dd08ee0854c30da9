//! Pointer hover debounce.
//!
//! Entering a panel arms a single pending timer; the panel becomes the
//! hovered one only if the pointer is still there when it fires. Leaving
//! clears everything at once.

mod tracker;

pub use tracker::{HoverChange, HoverTracker};

#[cfg(test)]
mod tests;
