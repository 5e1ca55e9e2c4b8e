//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Pure function:
//! `AppConfig → Result<(), Vec<ValidationError>>`, returning all errors
//! rather than just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be at least 1")]
    RequestTimeout,

    #[error("ui.{field} must not be empty")]
    EmptyUiPath { field: &'static str },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.ui.template_dir.trim().is_empty() {
        errors.push(ValidationError::EmptyUiPath {
            field: "template_dir",
        });
    }
    if config.ui.static_dir.trim().is_empty() {
        errors.push(ValidationError::EmptyUiPath {
            field: "static_dir",
        });
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
