//! Window geometry: where the strip sits and where each panel's page goes.

use isolix_common::Rect;
use isolix_config::schema::LayoutConfig;

use crate::app_state::core::IsolixApp;
use crate::app_state::types::{PANEL_HEADER_PX, TITLEBAR_PX};

// =============================================================================
// GEOMETRY
// =============================================================================

/// Area of the window the panel strip may occupy, in logical pixels.
///
/// Left of it is the workspace sidebar, above it the title bar, below it
/// the broadcast bar and dock.
pub fn strip_area(layout: &LayoutConfig, width: f64, height: f64) -> Rect {
    let pad = layout.padding as f64;
    let x = layout.sidebar_width as f64 + pad;
    let y = TITLEBAR_PX + pad;
    Rect::new(
        x,
        y,
        (width - x - pad).max(0.0),
        (height - y - layout.dock_height as f64 - pad).max(0.0),
    )
}

/// Where a panel's page goes: below its header, clipped to the strip.
///
/// `None` when the panel is scrolled fully out of view.
pub fn panel_view_rect(panel: &Rect, strip: &Rect) -> Option<Rect> {
    let body = Rect::new(
        panel.x,
        panel.y + PANEL_HEADER_PX,
        panel.width,
        (panel.height - PANEL_HEADER_PX).max(0.0),
    );
    body.intersect(strip)
}

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// SYNC
// =============================================================================

impl IsolixApp {
    /// Move every view to match the current strip layout.
    ///
    /// Panel views are hidden while the boot sequence or a modal covers
    /// the strip.
    pub(in crate::app_state) fn sync_view_bounds(&mut self) {
        let Some(size) = self.window_logical_size() else {
            return;
        };
        let Some(registry) = self.webviews.as_ref() else {
            return;
        };

        let full = Rect::new(0.0, 0.0, size.width, size.height);
        if let Some(chrome) = registry.get(&isolix_webview::chrome_key()) {
            if let Err(e) = chrome.set_bounds(to_wry_rect(&full)) {
                tracing::warn!(error = %e, "Failed to update chrome bounds");
            }
        }

        let shown = self.boot.is_ready() && self.state.panels_visible();
        let strip = self.state.viewport().strip;
        let layout = self.state.strip_layout();

        for panel in self.state.panels() {
            let Some(handle) = registry.get(&panel.isolation_key) else {
                continue;
            };
            let target = layout
                .rect_of(&panel.id)
                .and_then(|r| panel_view_rect(&r, &strip))
                .filter(|_| shown);

            let result = match target {
                Some(rect) => handle
                    .set_bounds(to_wry_rect(&rect))
                    .and_then(|_| handle.set_visible(true)),
                None => handle.set_visible(false),
            };
            if let Err(e) = result {
                tracing::warn!(panel_id = %panel.id, error = %e, "Failed to update webview bounds");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_area_reserves_chrome() {
        let layout = LayoutConfig::default();
        let strip = strip_area(&layout, 1400.0, 900.0);
        assert!((strip.x - 72.0).abs() < f64::EPSILON);
        assert!((strip.y - (TITLEBAR_PX + 16.0)).abs() < f64::EPSILON);
        assert!((strip.width - (1400.0 - 72.0 - 16.0)).abs() < f64::EPSILON);
        assert!((strip.height - (900.0 - TITLEBAR_PX - 16.0 - 96.0 - 16.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn strip_area_never_negative() {
        let strip = strip_area(&LayoutConfig::default(), 10.0, 10.0);
        assert_eq!(strip.width, 0.0);
        assert_eq!(strip.height, 0.0);
    }

    #[test]
    fn page_sits_below_header() {
        let strip = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let panel = Rect::new(100.0, 0.0, 300.0, 600.0);
        let page = panel_view_rect(&panel, &strip).unwrap();
        assert!((page.y - PANEL_HEADER_PX).abs() < f64::EPSILON);
        assert!((page.height - (600.0 - PANEL_HEADER_PX)).abs() < f64::EPSILON);
        assert!((page.width - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scrolled_panels_are_clipped_or_hidden() {
        let strip = Rect::new(100.0, 0.0, 800.0, 600.0);

        let partly = Rect::new(50.0, 0.0, 200.0, 600.0);
        let page = panel_view_rect(&partly, &strip).unwrap();
        assert!((page.x - 100.0).abs() < f64::EPSILON);
        assert!((page.width - 150.0).abs() < f64::EPSILON);

        let gone = Rect::new(-400.0, 0.0, 200.0, 600.0);
        assert!(panel_view_rect(&gone, &strip).is_none());
    }

    #[test]
    fn layout_rect_converts_to_wry_rect() {
        let rect = Rect::new(100.0, 50.0, 800.0, 600.0);
        let wry_rect = to_wry_rect(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
