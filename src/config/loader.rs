//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `auth.proxy_key`.
pub const PROXY_SECRET_ENV: &str = "PROXY_SECRET";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// The `PROXY_SECRET` environment variable, when set and non-empty,
/// takes precedence over `auth.proxy_key` from the file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: GatewayConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build a configuration from defaults plus environment overrides.
///
/// Used when no config file is given on the command line.
pub fn load_default_config() -> Result<GatewayConfig, ConfigError> {
    let mut config = GatewayConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(secret) = std::env::var(PROXY_SECRET_ENV) {
        if !secret.is_empty() {
            config.auth.proxy_key = secret;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_minimal_file() {
        let file = tempfile_with(
            r#"
            [auth]
            proxy_key = "secret123"

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.auth.proxy_key, "secret123");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        // Untouched sections keep their defaults.
        assert!(config.upstream.url.contains("chat/completions"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let file = tempfile_with("auth = not valid");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_key() {
        let file = tempfile_with("[listener]\nbind_address = \"127.0.0.1:9000\"\n");
        // Only meaningful when PROXY_SECRET is not set in the environment.
        if std::env::var(PROXY_SECRET_ENV).is_err() {
            assert!(matches!(
                load_config(file.path()),
                Err(ConfigError::Validation(_))
            ));
        }
    }

    fn tempfile_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }
}
