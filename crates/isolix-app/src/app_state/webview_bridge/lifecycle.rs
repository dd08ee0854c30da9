//! Panel view lifecycle: create and destroy views so the mounted set
//! matches the active workspace.

use std::collections::HashSet;
use std::path::Path;

use isolix_common::{IsolationKey, Panel};
use isolix_config::partition_dir;
use isolix_config::schema::WebViewConfig as WebViewSettings;
use isolix_webview::{WebViewConfig, CHROME_KEY, PANEL_POINTER_SCRIPT};

use crate::app_state::core::IsolixApp;

use super::bounds::to_wry_rect;

// =============================================================================
// PLANNING
// =============================================================================

/// Views to create and destroy to reach the wanted set.
#[derive(Debug, Default, PartialEq)]
pub struct ViewSyncPlan {
    pub create: Vec<IsolationKey>,
    pub destroy: Vec<IsolationKey>,
}

/// Compare live views with the panels that should be mounted.
///
/// The chrome view is never touched. Creation follows panel order.
pub fn plan_view_sync(live: &[IsolationKey], wanted: &[IsolationKey]) -> ViewSyncPlan {
    let live_set: HashSet<&IsolationKey> = live.iter().collect();
    let wanted_set: HashSet<&IsolationKey> = wanted.iter().collect();

    let mut destroy: Vec<IsolationKey> = live
        .iter()
        .filter(|k| k.as_str() != CHROME_KEY && !wanted_set.contains(k))
        .cloned()
        .collect();
    destroy.sort();

    ViewSyncPlan {
        create: wanted
            .iter()
            .filter(|k| !live_set.contains(k))
            .cloned()
            .collect(),
        destroy,
    }
}

/// Build the config for one panel's view.
///
/// The view gets its own profile directory and the pointer script, and
/// starts hidden until the next bounds sync places it.
pub fn panel_view_config(panel: &Panel, data_dir: &Path, settings: &WebViewSettings) -> WebViewConfig {
    let mut config = WebViewConfig::with_url(panel.url.clone())
        .data_directory(partition_dir(data_dir, &panel.isolation_key))
        .init_script(PANEL_POINTER_SCRIPT);
    config.devtools = settings.devtools;
    config.user_agent = settings.user_agent.clone();
    config.visible = false;
    config
}

// =============================================================================
// WEBVIEW LIFECYCLE
// =============================================================================

impl IsolixApp {
    /// Mount views for the active workspace's panels and drop the rest.
    ///
    /// Views are looked up by isolation key, so reorders never recreate them.
    pub(in crate::app_state) fn sync_panel_views(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(registry) = self.webviews.as_mut() else {
            return;
        };

        let wanted: Vec<IsolationKey> = self
            .state
            .panels()
            .iter()
            .map(|p| p.isolation_key.clone())
            .collect();
        let plan = plan_view_sync(&registry.keys(), &wanted);

        for key in &plan.destroy {
            registry.destroy(key);
        }

        for key in &plan.create {
            let Some(panel) = self.state.panels().iter().find(|p| &p.isolation_key == key) else {
                continue;
            };
            let config = panel_view_config(panel, &self.data_dir, &self.config.webview);
            let bounds = to_wry_rect(&self.state.viewport().strip);
            if let Err(e) = registry.create(key.clone(), window.as_ref(), bounds, config) {
                tracing::error!(panel_id = %panel.id, error = %e, "Failed to create panel webview");
            }
        }

        if !plan.create.is_empty() || !plan.destroy.is_empty() {
            tracing::debug!(
                created = plan.create.len(),
                destroyed = plan.destroy.len(),
                mounted = registry.count(),
                "panel views synced"
            );
        }
        self.layout_dirty = true;
    }

    /// Panel in the active workspace owning `key`.
    pub(in crate::app_state) fn panel_for_key(&self, key: &IsolationKey) -> Option<&Panel> {
        self.state.panels().iter().find(|p| &p.isolation_key == key)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use isolix_common::{ColorTag, PanelId};

    use super::*;

    fn key(s: &str) -> IsolationKey {
        IsolationKey::from(s)
    }

    #[test]
    fn creates_missing_and_destroys_stale() {
        let live = vec![key(CHROME_KEY), key("panel_a"), key("panel_b")];
        let wanted = vec![key("panel_b"), key("panel_c")];
        let plan = plan_view_sync(&live, &wanted);
        assert_eq!(plan.create, vec![key("panel_c")]);
        assert_eq!(plan.destroy, vec![key("panel_a")]);
    }

    #[test]
    fn chrome_is_never_destroyed() {
        let plan = plan_view_sync(&[key(CHROME_KEY)], &[]);
        assert_eq!(plan, ViewSyncPlan::default());
    }

    #[test]
    fn reorder_is_a_no_op() {
        let live = vec![key("panel_a"), key("panel_b")];
        let wanted = vec![key("panel_b"), key("panel_a")];
        assert_eq!(plan_view_sync(&live, &wanted), ViewSyncPlan::default());
    }

    #[test]
    fn panel_config_is_isolated_and_hidden() {
        let panel = Panel::new(PanelId::from("p1"), "Docs", "https://docs.rs", ColorTag::Cyan, 0);
        let settings = WebViewSettings {
            devtools: true,
            user_agent: Some("Isolix/1.0".into()),
            allow_popups: false,
        };
        let config = panel_view_config(&panel, Path::new("/data/isolix"), &settings);

        assert_eq!(config.url.as_deref(), Some("https://docs.rs"));
        assert_eq!(
            config.data_directory,
            Some(PathBuf::from("/data/isolix/partitions/panel_p1"))
        );
        assert_eq!(config.init_scripts, vec![PANEL_POINTER_SCRIPT.to_string()]);
        assert_eq!(config.user_agent.as_deref(), Some("Isolix/1.0"));
        assert!(config.devtools);
        assert!(!config.visible);
    }

    #[test]
    fn two_panels_never_share_a_profile() {
        let settings = WebViewSettings::default();
        let a = Panel::new(PanelId::from("p1"), "A", "https://a.test", ColorTag::Cyan, 0);
        let b = Panel::new(PanelId::from("p2"), "A", "https://a.test", ColorTag::Cyan, 1);
        let dir = Path::new("/data");
        assert_ne!(
            panel_view_config(&a, dir, &settings).data_directory,
            panel_view_config(&b, dir, &settings).data_directory
        );
    }
}
