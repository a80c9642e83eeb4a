//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate listener addresses and that they do not collide
//! - Validate value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a socket address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("http_address and https_address must differ, both are {0}")]
    ConflictingAddresses(SocketAddr),
    #[error("{0} must not be empty")]
    EmptyPath(&'static str),
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let http = parse_address("listener.http_address", &config.listener.http_address, &mut errors);
    let https = parse_address("listener.https_address", &config.listener.https_address, &mut errors);
    if let (Some(http), Some(https)) = (http, https) {
        if http == https {
            errors.push(ValidationError::ConflictingAddresses(http));
        }
    }

    if config.tls.cert_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPath("tls.cert_path"));
    }
    if config.tls.key_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPath("tls.key_path"));
    }
    if config.assets.index_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPath("assets.index_path"));
    }

    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_address(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<SocketAddr> {
    match value.parse() {
        Ok(addr) => Some(addr),
        Err(_) => {
            errors.push(ValidationError::InvalidAddress {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let mut config = ServerConfig::default();
        config.listener.http_address = "bad".into();
        config.tls.key_path = PathBuf::new();
        config.timeouts.request_secs = Some(0);
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyPath("tls.key_path")));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn same_address_twice_conflicts() {
        let mut config = ServerConfig::default();
        config.listener.https_address = config.listener.http_address.clone();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[..], [ValidationError::ConflictingAddresses(_)]));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = ServerConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
