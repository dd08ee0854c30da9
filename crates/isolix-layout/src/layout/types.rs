//! Layout engine types and configuration.

use serde::{Deserialize, Serialize};

/// Sizing parameters for the horizontal panel strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gutter subtracted from the viewport width before dividing it by
    /// three in scroll mode.
    pub gutter_px: f64,
    /// Scroll mode is used when the panel count exceeds this.
    pub scroll_threshold: usize,
    /// Hovered panel width in scroll mode, percent of viewport width.
    pub hovered_vw: f64,
    /// Non-hovered panel width in scroll mode while another is hovered.
    pub shrunk_vw: f64,
    /// Flex weight of the hovered panel in flex mode.
    pub hovered_flex: u32,
    /// Gap in pixels between adjacent panels.
    pub gap: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gutter_px: 64.0,
            scroll_threshold: 3,
            hovered_vw: 60.0,
            shrunk_vw: 16.0,
            hovered_flex: 5,
            gap: 12.0,
        }
    }
}

/// How the strip distributes width for a given panel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One panel, always full width.
    Single,
    /// Few panels sharing the width by flex weight.
    Flex,
    /// Many panels with fixed widths and horizontal overflow.
    Scroll,
}

/// Display width of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidthClass {
    /// All available width.
    Full,
    /// Fixed percentage of the viewport width.
    Viewport { percent: f64 },
    /// `(viewport - gutter_px) / share`.
    ViewportShare { gutter_px: f64, share: u32 },
    /// Proportional share of the strip.
    Flex { weight: u32 },
}

impl WidthClass {
    /// Fixed pixel width for a viewport, or `None` for flexible classes.
    pub fn fixed_width(&self, viewport_width: f64) -> Option<f64> {
        match *self {
            WidthClass::Viewport { percent } => Some(viewport_width * percent / 100.0),
            WidthClass::ViewportShare { gutter_px, share } => {
                Some(((viewport_width - gutter_px) / share.max(1) as f64).max(0.0))
            }
            WidthClass::Full | WidthClass::Flex { .. } => None,
        }
    }

    /// Flex weight; `Full` counts as a single share.
    pub fn weight(&self) -> u32 {
        match *self {
            WidthClass::Flex { weight } => weight,
            _ => 1,
        }
    }
}
