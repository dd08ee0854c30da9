//! The narrow surface the shell needs from an embedded browser view.
//!
//! Both the broadcast injector and the panel controls go through
//! [`EmbeddedView`], so tests can substitute a mock for a real WebView.

use isolix_common::{HistoryStep, InjectError, IsolationKey, IsolixError};

pub trait EmbeddedView {
    /// URL the view is currently showing.
    fn current_url(&self) -> &str;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Load `url` in place.
    fn navigate(&mut self, url: &str) -> Result<(), IsolixError>;

    /// Step through the view's session history.
    fn history(&mut self, step: HistoryStep) -> Result<(), IsolixError>;

    /// Put `payload` into the page's focused or best-guess text field.
    ///
    /// Returns once the script has been handed to the view; whether a field
    /// was found is only known to the page.
    fn inject_text(&self, payload: &str) -> Result<(), InjectError>;
}

/// Looks up the live view for an isolation key.
pub trait ViewResolver {
    fn resolve(&self, key: &IsolationKey) -> Option<&dyn EmbeddedView>;
}
