//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Isolix Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[hover]
# Milliseconds the pointer must rest on a panel before it expands.
# Changing the delay from the settings panel stores it in the database,
# which takes precedence over this value.
# delay_ms = 500         # 0-10000

[layout]
# gutter_px = 64         # 0-200, subtracted before splitting into thirds
# scroll_threshold = 3   # 1-10, horizontal scrolling above this many panels
# hovered_vw = 60        # 20-100, hovered panel width in scroll mode
# shrunk_vw = 16         # 5-50, other panels while one is hovered
# hovered_flex = 5       # 1-20, hovered flex weight with few panels
# panel_gap = 12         # 0-40
# padding = 16           # 0-40
# dock_height = 96       # 0-400
# sidebar_width = 56     # 0-400

[broadcast]
# default_launch_url = "https://search.brave.com"

# Typing one of these names alone in the broadcast bar opens it in a new panel.
[broadcast.shortcuts]
google = "https://google.com"
chatgpt = "https://chatgpt.com"
claude = "https://claude.ai"
perplexity = "https://perplexity.ai"
youtube = "https://youtube.com"
gmail = "https://gmail.com"

[window]
# width = 1400
# height = 900
# decorations = false
# title = "Isolix"
# start_maximized = false

[webview]
# devtools = false
# user_agent = "Mozilla/5.0 ..."
# allow_popups = true

[store]
# enabled = true
# path = "/path/to/prism.db"

[startup]
# splash_duration_ms = 3000   # 0-10000
# show_onboarding = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
