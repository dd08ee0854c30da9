use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the workspace/panel store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open store: {0}")]
    Open(String),

    #[error("sqlite error: {0}")]
    Sqlite(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("refusing to delete the last remaining workspace")]
    LastWorkspace,
}

/// Failures delivering a broadcast payload into one embedded view.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("view not resolvable for isolation key {0}")]
    ViewNotResolvable(String),

    #[error("script error: {0}")]
    Script(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IsolixError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("hover.delay_ms out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: hover.delay_ms out of range"
        );
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::NotFound("workspace w1".into());
        assert_eq!(err.to_string(), "not found: workspace w1");

        let err = StoreError::LastWorkspace;
        assert_eq!(
            err.to_string(),
            "refusing to delete the last remaining workspace"
        );
    }

    #[test]
    fn inject_error_display() {
        let err = InjectError::ViewNotResolvable("panel_p1".into());
        assert_eq!(
            err.to_string(),
            "view not resolvable for isolation key panel_p1"
        );
    }

    #[test]
    fn isolix_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: IsolixError = config_err.into();
        assert!(matches!(err, IsolixError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn isolix_error_from_store() {
        let err: IsolixError = StoreError::Sqlite("disk I/O error".into()).into();
        assert!(matches!(err, IsolixError::Store(_)));
        assert!(err.to_string().contains("disk I/O error"));
    }

    #[test]
    fn isolix_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IsolixError = io_err.into();
        assert!(matches!(err, IsolixError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn isolix_error_other_variants() {
        let err = IsolixError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = IsolixError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = IsolixError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
