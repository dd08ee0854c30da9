//! Layout calculation: width classes to pixel rects along the strip.

use isolix_common::{PanelId, Rect};

use super::{LayoutEngine, LayoutMode};

/// Pixel placement of every panel in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    pub mode: LayoutMode,
    /// Panel rects in strip order, already shifted by the scroll offset.
    pub rects: Vec<(PanelId, Rect)>,
    /// Total width of all panels and gaps, before scrolling.
    pub content_width: f64,
}

impl StripLayout {
    pub fn rect_of(&self, id: &PanelId) -> Option<Rect> {
        self.rects.iter().find(|(p, _)| p == id).map(|(_, r)| *r)
    }
}

impl LayoutEngine {
    /// Place `panels` inside `area`.
    ///
    /// Viewport-relative widths resolve against `viewport_width` (the window
    /// width), not the strip area. `scroll_offset` only applies in scroll mode
    /// and is clamped to the overflow.
    pub fn compute(
        &self,
        panels: &[PanelId],
        hovered: Option<&PanelId>,
        area: Rect,
        viewport_width: f64,
        scroll_offset: f64,
    ) -> StripLayout {
        let count = panels.len();
        let mode = self.mode(count);
        let classes: Vec<_> = panels
            .iter()
            .map(|id| self.width_class(id, count, hovered))
            .collect();

        let gaps = self.gap * count.saturating_sub(1) as f64;
        let widths: Vec<f64> = match mode {
            LayoutMode::Scroll => classes
                .iter()
                .map(|c| c.fixed_width(viewport_width).unwrap_or(0.0))
                .collect(),
            LayoutMode::Single | LayoutMode::Flex => {
                let available = (area.width - gaps).max(0.0);
                let total: u32 = classes.iter().map(|c| c.weight()).sum();
                classes
                    .iter()
                    .map(|c| available * c.weight() as f64 / total.max(1) as f64)
                    .collect()
            }
        };

        let content_width = widths.iter().sum::<f64>() + gaps;
        let offset = if mode == LayoutMode::Scroll {
            clamp_scroll(scroll_offset, content_width, area.width)
        } else {
            0.0
        };

        let mut x = area.x - offset;
        let rects = panels
            .iter()
            .zip(widths)
            .map(|(id, width)| {
                let rect = Rect::new(x, area.y, width, area.height);
                x += width + self.gap;
                (id.clone(), rect)
            })
            .collect();

        StripLayout {
            mode,
            rects,
            content_width,
        }
    }
}

/// Clamp a horizontal scroll offset to `[0, content - visible]`.
pub fn clamp_scroll(offset: f64, content_width: f64, visible_width: f64) -> f64 {
    let max = (content_width - visible_width).max(0.0);
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max)
}
