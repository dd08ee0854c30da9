//! Panel strip layout configuration.

use serde::{Deserialize, Serialize};

/// Sizing of the panel strip.
///
/// Widths in scroll mode are expressed in percent of the viewport width;
/// flex weights apply when the panel count is at or below the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gutter subtracted from the viewport before splitting it into
    /// three equal panels in scroll mode (valid range: 0-200).
    pub gutter_px: u32,
    /// Scroll mode starts when the panel count exceeds this (valid range: 1-10).
    pub scroll_threshold: u32,
    /// Hovered panel width in scroll mode, percent of viewport (valid range: 20-100).
    pub hovered_vw: u32,
    /// Other panels' width in scroll mode while one is hovered (valid range: 5-50).
    pub shrunk_vw: u32,
    /// Flex weight of the hovered panel in flex mode (valid range: 1-20).
    pub hovered_flex: u32,
    /// Gap between adjacent panels in pixels (valid range: 0-40).
    pub panel_gap: u32,
    /// Outer padding around the strip in pixels (valid range: 0-40).
    pub padding: u32,
    /// Height reserved for the broadcast bar and dock (valid range: 0-400).
    pub dock_height: u32,
    /// Width reserved for the workspace sidebar (valid range: 0-400).
    pub sidebar_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gutter_px: 64,
            scroll_threshold: 3,
            hovered_vw: 60,
            shrunk_vw: 16,
            hovered_flex: 5,
            panel_gap: 12,
            padding: 16,
            dock_height: 96,
            sidebar_width: 56,
        }
    }
}
