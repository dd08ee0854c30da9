mod app_state;
mod boot;
mod cli;
mod persist;

use isolix_common::IdGenerator;
use isolix_config::IsolixConfig;
use isolix_store::{load_session, MemoryStore, Session, SqliteStore, WorkspaceStore};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "isolix=info";

/// Filter directive: the CLI flag wins, then the config file's level.
fn log_directive(cli: Option<&str>, config: Option<&IsolixConfig>) -> String {
    match (cli, config) {
        (Some(directive), _) => directive.to_string(),
        (None, Some(config)) => format!("isolix={}", config.logging.level.as_str()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

/// Open the configured store, degrading to memory when it is unavailable.
fn open_store(config: &IsolixConfig, in_memory: bool) -> Box<dyn WorkspaceStore> {
    if in_memory || !config.store.enabled {
        tracing::info!("Store disabled, workspaces will not outlive this session");
        return Box::new(MemoryStore::new());
    }

    let path = match config.store.path.clone() {
        Some(p) => Ok(p),
        None => isolix_config::default_db_path(),
    };
    let opened = path
        .map_err(|e| e.to_string())
        .and_then(|p| SqliteStore::open_at(&p).map_err(|e| e.to_string()));

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Store unavailable, falling back to memory");
            Box::new(MemoryStore::new())
        }
    }
}

/// Load the session, retrying against a fresh memory store if the opened
/// one fails to read.
fn load(mut store: Box<dyn WorkspaceStore>) -> (Session, Box<dyn WorkspaceStore>) {
    let mut ids = IdGenerator::new();
    match load_session(store.as_mut(), &mut ids) {
        Ok(session) => (session, store),
        Err(e) => {
            tracing::warn!(backend = store.backend(), error = %e, "Session load failed, falling back to memory");
            let mut memory: Box<dyn WorkspaceStore> = Box::new(MemoryStore::new());
            match load_session(memory.as_mut(), &mut ids) {
                Ok(session) => (session, memory),
                Err(e) => {
                    // AppState seeds a default workspace from an empty session.
                    tracing::error!(error = %e, "Memory session load failed");
                    let session = Session {
                        workspaces: Vec::new(),
                        active: isolix_common::WorkspaceId::from(""),
                        hover_delay_ms: None,
                        onboarding_completed: false,
                    };
                    (session, memory)
                }
            }
        }
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter
    let loaded = isolix_config::load_config(args.config.as_deref());

    // Initialize logging
    let directive = log_directive(args.log_level.as_deref(), loaded.as_ref().ok());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Isolix v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        IsolixConfig::default()
    });

    // Open the store and load workspaces
    let store = open_store(&config, args.in_memory);
    let (session, store) = load(store);
    tracing::info!(
        backend = store.backend(),
        workspaces = session.workspaces.len(),
        "Session loaded"
    );

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::IsolixApp::new(config, session, store);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use isolix_config::schema::LogLevel;

    use super::*;

    #[test]
    fn cli_directive_wins() {
        let config = IsolixConfig::default();
        assert_eq!(log_directive(Some("isolix=trace"), Some(&config)), "isolix=trace");
    }

    #[test]
    fn config_level_is_used_without_flag() {
        let mut config = IsolixConfig::default();
        config.logging.level = LogLevel::Debug;
        assert_eq!(log_directive(None, Some(&config)), "isolix=debug");
        assert_eq!(log_directive(None, None), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn disabled_store_is_memory() {
        let mut config = IsolixConfig::default();
        config.store.enabled = false;
        assert_eq!(open_store(&config, false).backend(), "memory");
        assert_eq!(open_store(&IsolixConfig::default(), true).backend(), "memory");
    }

    #[test]
    fn sqlite_store_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = IsolixConfig::default();
        config.store.path = Some(dir.path().join("prism.db"));
        let store = open_store(&config, false);
        assert_eq!(store.backend(), "sqlite");

        let (session, _store) = load(store);
        assert_eq!(session.workspaces.len(), 1);
        assert_eq!(session.workspaces[0].panels[0].title, "Google");
    }

    #[test]
    fn unopenable_store_degrades_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = IsolixConfig::default();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        config.store.path = Some(blocker.join("prism.db"));
        assert_eq!(open_store(&config, false).backend(), "memory");
    }
}
