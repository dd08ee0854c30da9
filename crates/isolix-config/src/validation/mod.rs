//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::IsolixConfig;
use isolix_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &IsolixConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_hover(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    misc::validate_broadcast(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_startup(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
