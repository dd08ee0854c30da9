//! Broadcast delivery: one routing decision, many panel views.

use isolix_common::{PanelId, RoutingDecision};
use tracing::{debug, info, warn};

use crate::capability::ViewResolver;

/// What happened to each target of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Script handed to the view.
    pub delivered: Vec<PanelId>,
    /// No live view for the panel's isolation key.
    pub skipped: Vec<PanelId>,
    /// The view rejected the script.
    pub failed: Vec<(PanelId, String)>,
}

impl BroadcastReport {
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.skipped.len() + self.failed.len()
    }
}

/// Delivers routing decisions to panel views.
///
/// Each target is attempted independently; a missing or failing view never
/// stops delivery to the rest.
pub struct BroadcastInjector;

impl BroadcastInjector {
    pub fn deliver(decision: &RoutingDecision, views: &dyn ViewResolver) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        for panel in &decision.targets {
            let Some(view) = views.resolve(&panel.isolation_key) else {
                debug!(
                    panel_id = %panel.id,
                    key = %panel.isolation_key,
                    "broadcast target skipped: view not mounted"
                );
                report.skipped.push(panel.id.clone());
                continue;
            };

            match view.inject_text(&decision.payload) {
                Ok(()) => report.delivered.push(panel.id.clone()),
                Err(e) => {
                    warn!(panel_id = %panel.id, error = %e, "broadcast injection failed");
                    report.failed.push((panel.id.clone(), e.to_string()));
                }
            }
        }

        info!(
            directed = decision.directed,
            delivered = report.delivered.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "broadcast dispatched"
        );
        report
    }
}
