use serde::{Deserialize, Serialize};
use std::fmt;

use super::core::{IsolationKey, PanelId, WorkspaceId};

// =============================================================================
// COLOR TAG
// =============================================================================

/// Accent colour shown on a panel's header strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Emerald,
    #[default]
    Blue,
    Purple,
    Orange,
    Pink,
    Cyan,
}

impl ColorTag {
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Emerald,
        ColorTag::Blue,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::Pink,
        ColorTag::Cyan,
    ];

    /// Stored form, e.g. `bg-blue-500`.
    pub fn class(self) -> &'static str {
        match self {
            ColorTag::Emerald => "bg-emerald-500",
            ColorTag::Blue => "bg-blue-500",
            ColorTag::Purple => "bg-purple-500",
            ColorTag::Orange => "bg-orange-500",
            ColorTag::Pink => "bg-pink-500",
            ColorTag::Cyan => "bg-cyan-500",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorTag::Emerald => "#10b981",
            ColorTag::Blue => "#3b82f6",
            ColorTag::Purple => "#a855f7",
            ColorTag::Orange => "#f97316",
            ColorTag::Pink => "#ec4899",
            ColorTag::Cyan => "#06b6d4",
        }
    }

    /// Parse the stored class name. Accepts the bare colour name too.
    pub fn parse(s: &str) -> Option<Self> {
        let name = s
            .trim()
            .strip_prefix("bg-")
            .map(|rest| rest.strip_suffix("-500").unwrap_or(rest))
            .unwrap_or(s.trim());
        match name.to_ascii_lowercase().as_str() {
            "emerald" => Some(ColorTag::Emerald),
            "blue" => Some(ColorTag::Blue),
            "purple" => Some(ColorTag::Purple),
            "orange" => Some(ColorTag::Orange),
            "pink" => Some(ColorTag::Pink),
            "cyan" => Some(ColorTag::Cyan),
            _ => None,
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

// =============================================================================
// PANEL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    pub url: String,
    pub color: ColorTag,
    pub isolation_key: IsolationKey,
    pub position: u32,
}

impl Panel {
    /// New panel with its isolation key derived from the id.
    pub fn new(
        id: PanelId,
        title: impl Into<String>,
        url: impl Into<String>,
        color: ColorTag,
        position: u32,
    ) -> Self {
        let isolation_key = IsolationKey::for_panel(&id);
        Self {
            id,
            title: title.into(),
            url: url.into(),
            color,
            isolation_key,
            position,
        }
    }

    /// Case-folded title, the form `@name` mentions match against.
    pub fn mention_name(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Prepend `https://` unless the value already names a scheme we load.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") || trimmed.starts_with("file://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// First letter upper-cased, the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// WORKSPACE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub panels: Vec<Panel>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            panels: Vec::new(),
        }
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn panel_mut(&mut self, id: &PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| &p.id == id)
    }

    pub fn index_of(&self, id: &PanelId) -> Option<usize> {
        self.panels.iter().position(|p| &p.id == id)
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id.clone()).collect()
    }

    /// Re-derive `position` from sequence order.
    pub fn reindex(&mut self) {
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.position = i as u32;
        }
    }

    /// `(id, position)` pairs in current order.
    pub fn positions(&self) -> Vec<(PanelId, u32)> {
        self.panels
            .iter()
            .map(|p| (p.id.clone(), p.position))
            .collect()
    }
}
