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
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cookie-server-{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let path = write_temp("empty", "");
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.http_address, "0.0.0.0:8080");
        assert_eq!(config.listener.https_address, "0.0.0.0:8443");
        assert_eq!(config.tls.cert_path, PathBuf::from("cert.pem"));
        assert!(config.timeouts.request_timeout().is_none());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn partial_file_overrides_fields() {
        let path = write_temp(
            "partial",
            r#"
            [listener]
            http_address = "127.0.0.1:9000"

            [assets]
            index_path = "public/page.html"

            [timeouts]
            request_secs = 15
            "#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.http_address, "127.0.0.1:9000");
        assert_eq!(config.listener.https_address, "0.0.0.0:8443");
        assert_eq!(config.assets.index_path, PathBuf::from("public/page.html"));
        assert_eq!(config.timeouts.request_secs, Some(15));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = write_temp(
            "invalid",
            r#"
            [listener]
            http_address = "nowhere"
            "#,
        );
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("nowhere"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn syntax_errors_are_parse_errors() {
        let path = write_temp("syntax", "[listener\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("cookie-server-does-not-exist.toml");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }
}
