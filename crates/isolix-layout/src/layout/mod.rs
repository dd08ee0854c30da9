mod calculation;
mod types;
mod width;

pub use calculation::{clamp_scroll, StripLayout};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use isolix_common::{PanelId, Rect};

    fn ids(n: usize) -> Vec<PanelId> {
        (0..n).map(|i| PanelId::new(format!("p{i}"))).collect()
    }

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    #[test]
    fn single_panel_is_full_regardless_of_hover() {
        let engine = LayoutEngine::default();
        let panels = ids(1);
        assert_eq!(engine.width_class(&panels[0], 1, None), WidthClass::Full);
        assert_eq!(
            engine.width_class(&panels[0], 1, Some(&panels[0])),
            WidthClass::Full
        );
    }

    #[test]
    fn scroll_mode_hovered_and_others() {
        let engine = LayoutEngine::default();
        let panels = ids(5);
        let c = &panels[2];
        for p in &panels {
            let class = engine.width_class(p, 5, Some(c));
            if p == c {
                assert_eq!(class, WidthClass::Viewport { percent: 60.0 });
            } else {
                assert_eq!(class, WidthClass::Viewport { percent: 16.0 });
            }
        }
    }

    #[test]
    fn scroll_mode_nothing_hovered_splits_in_thirds() {
        let engine = LayoutEngine::default();
        let panels = ids(5);
        for p in &panels {
            let class = engine.width_class(p, 5, None);
            assert_eq!(
                class,
                WidthClass::ViewportShare {
                    gutter_px: 64.0,
                    share: 3
                }
            );
            assert_eq!(class.fixed_width(1264.0), Some(400.0));
        }
    }

    #[test]
    fn flex_mode_weights() {
        let engine = LayoutEngine::default();
        let panels = ids(3);
        assert_eq!(
            engine.width_class(&panels[0], 3, Some(&panels[0])),
            WidthClass::Flex { weight: 5 }
        );
        assert_eq!(
            engine.width_class(&panels[1], 3, Some(&panels[0])),
            WidthClass::Flex { weight: 1 }
        );
        assert_eq!(
            engine.width_class(&panels[1], 2, None),
            WidthClass::Flex { weight: 1 }
        );
    }

    #[test]
    fn threshold_boundary() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.mode(0), LayoutMode::Single);
        assert_eq!(engine.mode(1), LayoutMode::Single);
        assert_eq!(engine.mode(2), LayoutMode::Flex);
        assert_eq!(engine.mode(3), LayoutMode::Flex);
        assert_eq!(engine.mode(4), LayoutMode::Scroll);
    }

    #[test]
    fn width_class_is_deterministic() {
        let engine = LayoutEngine::default();
        let panels = ids(4);
        let a = engine.width_class(&panels[1], 4, Some(&panels[3]));
        let b = engine.width_class(&panels[1], 4, Some(&panels[3]));
        assert_eq!(a, b);
    }

    #[test]
    fn compute_single_fills_area() {
        let engine = LayoutEngine::default();
        let panels = ids(1);
        let layout = engine.compute(&panels, None, area(), 1200.0, 0.0);
        assert_eq!(layout.mode, LayoutMode::Single);
        assert_eq!(layout.rects[0].1, area());
    }

    #[test]
    fn compute_flex_hover_gives_five_to_one() {
        let engine = LayoutEngine {
            gap: 0.0,
            ..LayoutEngine::default()
        };
        let panels = ids(2);
        let layout = engine.compute(&panels, Some(&panels[0]), area(), 1200.0, 0.0);
        let a = layout.rects[0].1;
        let b = layout.rects[1].1;
        assert!((a.width - 1000.0).abs() < 0.01);
        assert!((b.width - 200.0).abs() < 0.01);
        assert!((b.x - 1000.0).abs() < 0.01);
    }

    #[test]
    fn compute_flex_gaps_reduce_space() {
        let engine = LayoutEngine {
            gap: 10.0,
            ..LayoutEngine::default()
        };
        let panels = ids(3);
        let layout = engine.compute(&panels, None, area(), 1200.0, 0.0);
        let total: f64 = layout.rects.iter().map(|(_, r)| r.width).sum();
        assert!((total - 1180.0).abs() < 0.01);
        assert!((layout.content_width - 1200.0).abs() < 0.01);
    }

    #[test]
    fn compute_scroll_mode_overflows_and_scrolls() {
        let engine = LayoutEngine {
            gap: 0.0,
            ..LayoutEngine::default()
        };
        let panels = ids(5);
        let layout = engine.compute(&panels, None, area(), 1264.0, 0.0);
        assert_eq!(layout.mode, LayoutMode::Scroll);
        assert!((layout.content_width - 2000.0).abs() < 0.01);

        let scrolled = engine.compute(&panels, None, area(), 1264.0, 300.0);
        assert!((scrolled.rects[0].1.x + 300.0).abs() < 0.01);

        // Offset past the end is clamped to the overflow.
        let clamped = engine.compute(&panels, None, area(), 1264.0, 10_000.0);
        let last = clamped.rects[4].1;
        assert!((last.right() - 1200.0).abs() < 0.01);
    }

    #[test]
    fn compute_scroll_mode_hovered_widths() {
        let engine = LayoutEngine::default();
        let panels = ids(5);
        let layout = engine.compute(&panels, Some(&panels[2]), area(), 1000.0, 0.0);
        assert!((layout.rect_of(&panels[2]).unwrap().width - 600.0).abs() < 0.01);
        assert!((layout.rect_of(&panels[0]).unwrap().width - 160.0).abs() < 0.01);
    }

    #[test]
    fn clamp_scroll_bounds() {
        assert_eq!(clamp_scroll(-50.0, 2000.0, 1000.0), 0.0);
        assert_eq!(clamp_scroll(500.0, 2000.0, 1000.0), 500.0);
        assert_eq!(clamp_scroll(5000.0, 2000.0, 1000.0), 1000.0);
        assert_eq!(clamp_scroll(100.0, 800.0, 1000.0), 0.0);
        assert_eq!(clamp_scroll(f64::NAN, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn width_class_json_shape() {
        let json = serde_json::to_string(&WidthClass::Flex { weight: 5 }).unwrap();
        assert_eq!(json, r#"{"kind":"flex","weight":5}"#);
    }
}
