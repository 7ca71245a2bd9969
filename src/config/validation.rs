//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the proxy key is present
//! - Validate the upstream URL and value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("auth.proxy_key must not be empty (set it in the config file or via PROXY_SECRET)")]
    EmptyProxyKey,

    #[error("upstream.url is not a valid URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("upstream.url scheme must be http or https, got {0}")]
    UnsupportedUpstreamScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),
}

/// Validate a loaded configuration, accumulating every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.auth.proxy_key.is_empty() {
        errors.push(ValidationError::EmptyProxyKey);
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) => {
            let scheme = url.scheme();
            if scheme != "http" && scheme != "https" {
                errors.push(ValidationError::UnsupportedUpstreamScheme(
                    scheme.to_string(),
                ));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl(e.to_string())),
    }

    if config.listener.bind_address.parse::<std::net::SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.request_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
