//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [middleware]
            server_header = "pipe-router"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.middleware.allowed_methods);
        assert_eq!(config.middleware.server_header.as_deref(), Some("pipe-router"));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e == &[ValidationError::ZeroTimeout]));
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs must be greater than zero"
        );
    }

    #[test]
    fn test_malformed_toml_fails_parsing() {
        assert!(matches!(parse_config("listener = ["), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let missing = std::env::temp_dir().join("pipe-router-missing-config.toml");
        assert!(matches!(load_config(&missing), Err(ConfigError::Io(_))));
    }
}
