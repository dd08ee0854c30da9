//! Layout configuration validation (widths, weights, gaps, reserved chrome).

use crate::schema::IsolixConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &IsolixConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.gutter_px", layout.gutter_px, 0, 200);
    validate_range(
        errors,
        "layout.scroll_threshold",
        layout.scroll_threshold,
        1,
        10,
    );
    validate_range(errors, "layout.hovered_vw", layout.hovered_vw, 20, 100);
    validate_range(errors, "layout.shrunk_vw", layout.shrunk_vw, 5, 50);
    validate_range(errors, "layout.hovered_flex", layout.hovered_flex, 1, 20);
    validate_range(errors, "layout.panel_gap", layout.panel_gap, 0, 40);
    validate_range(errors, "layout.padding", layout.padding, 0, 40);
    validate_range(errors, "layout.dock_height", layout.dock_height, 0, 400);
    validate_range(errors, "layout.sidebar_width", layout.sidebar_width, 0, 400);

    if layout.shrunk_vw >= layout.hovered_vw {
        errors.push(format!(
            "layout.shrunk_vw ({}) must be smaller than layout.hovered_vw ({})",
            layout.shrunk_vw, layout.hovered_vw
        ));
    }
}
