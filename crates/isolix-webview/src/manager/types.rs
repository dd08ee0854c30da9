use std::path::PathBuf;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Per-view profile directory. Cookies and storage live here, so two
    /// views never share a session.
    pub data_directory: Option<PathBuf>,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Scripts run before any page script on every load.
    pub init_scripts: Vec<String>,
    /// Whether the view starts shown.
    pub visible: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            data_directory: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            init_scripts: Vec::new(),
            visible: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub fn data_directory(mut self, dir: PathBuf) -> Self {
        self.data_directory = Some(dir);
        self
    }

    pub fn init_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }

    /// URL the view starts on, for bookkeeping.
    pub fn initial_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| "about:blank".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_config_defaults() {
        let config = WebViewConfig::with_url("https://a.test");
        assert_eq!(config.initial_url(), "https://a.test");
        assert!(config.html.is_none());
        assert!(config.visible);
        assert!(config.init_scripts.is_empty());
    }

    #[test]
    fn html_config_starts_blank() {
        let config = WebViewConfig::with_html("<p>hi</p>")
            .init_script("1")
            .data_directory(PathBuf::from("/tmp/p"));
        assert_eq!(config.initial_url(), "about:blank");
        assert_eq!(config.init_scripts, vec!["1".to_string()]);
        assert_eq!(config.data_directory, Some(PathBuf::from("/tmp/p")));
    }
}
