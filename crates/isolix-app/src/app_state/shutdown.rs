//! Graceful shutdown: destroy webviews, drain pending store writes.

use super::core::IsolixApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl IsolixApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Destroy webviews (panel profiles stay on disk)
    /// 2. Drain the persistence queue and close the store
    /// 3. Release the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Destroy all webviews
        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.chrome_ready = false;

        // 2. Flush queued writes
        self.persist.shutdown();

        // 3. Drop the window
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use isolix_common::IdGenerator;
    use isolix_config::IsolixConfig;
    use isolix_store::{load_session, MemoryStore};

    use crate::app_state::core::IsolixApp;

    fn app() -> IsolixApp {
        let mut store = MemoryStore::new();
        let session = load_session(&mut store, &mut IdGenerator::new()).unwrap();
        IsolixApp::new(IsolixConfig::default(), session, Box::new(store))
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();
        assert!(app.webviews.is_none());
        assert!(app.window.is_none());
        assert!(!app.chrome_ready);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown(); // second call must not panic
        assert!(app.persist.shutdown().is_none());
    }
}
