//! Width classification from panel count and hover state.

use isolix_common::PanelId;

use super::{LayoutEngine, LayoutMode, WidthClass};

/// Panels share the scroll-mode viewport in thirds when nothing is hovered.
const SCROLL_VISIBLE_PANELS: u32 = 3;

impl LayoutEngine {
    pub fn mode(&self, panel_count: usize) -> LayoutMode {
        if panel_count <= 1 {
            LayoutMode::Single
        } else if panel_count > self.scroll_threshold {
            LayoutMode::Scroll
        } else {
            LayoutMode::Flex
        }
    }

    /// Width class of `panel_id`. Depends only on the three inputs.
    ///
    /// A hovered id that is not `panel_id` still counts as "something else
    /// hovered", even if it names no panel in the strip.
    pub fn width_class(
        &self,
        panel_id: &PanelId,
        panel_count: usize,
        hovered_id: Option<&PanelId>,
    ) -> WidthClass {
        let is_hovered = hovered_id == Some(panel_id);
        let other_hovered = hovered_id.is_some() && !is_hovered;

        match self.mode(panel_count) {
            LayoutMode::Single => WidthClass::Full,
            LayoutMode::Scroll => {
                if is_hovered {
                    WidthClass::Viewport {
                        percent: self.hovered_vw,
                    }
                } else if other_hovered {
                    WidthClass::Viewport {
                        percent: self.shrunk_vw,
                    }
                } else {
                    WidthClass::ViewportShare {
                        gutter_px: self.gutter_px,
                        share: SCROLL_VISIBLE_PANELS,
                    }
                }
            }
            LayoutMode::Flex => {
                if is_hovered {
                    WidthClass::Flex {
                        weight: self.hovered_flex,
                    }
                } else {
                    WidthClass::Flex { weight: 1 }
                }
            }
        }
    }
}
