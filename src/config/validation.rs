//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("middleware.server_header {0:?} is not a valid header value")]
    ServerHeader(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }
    if let Some(server) = &config.middleware.server_header {
        if HeaderValue::from_str(server).is_err() {
            errors.push(ValidationError::ServerHeader(server.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_all_errors_are_reported() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.middleware.server_header = Some("bad\nvalue".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            [
                ValidationError::BindAddress("localhost".into()),
                ValidationError::ZeroTimeout,
                ValidationError::LogLevel("loud".into()),
                ValidationError::ServerHeader("bad\nvalue".into()),
            ]
        );
    }
}
