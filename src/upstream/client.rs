//! Outbound client for the fixed upstream endpoint.

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use crate::config::UpstreamConfig;

/// Failure to reach the upstream or build the client for it.
///
/// Upstream HTTP error statuses are not errors here; any reply from the
/// upstream, whatever its status, is a successful forward.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{0}")]
    Transport(String),
}

/// A completed upstream exchange: status plus fully-read body.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client for the configured chat-completion endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a client with the configured timeouts.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(UpstreamError::Build)?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// Forward a request body with the caller's credential, verbatim.
    ///
    /// Exactly one outbound call is made; there are no retries. The body
    /// is read to completion before returning.
    pub async fn forward(
        &self,
        authorization: HeaderValue,
        body: Bytes,
    ) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(UpstreamReply { status, body })
    }
}

fn transport_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        return UpstreamError::Transport("timeout".to_string());
    }
    // Strip the URL so error bodies stay stable across deployments.
    UpstreamError::Transport(error.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_formats_for_response_body() {
        let error = UpstreamError::Transport("timeout".into());
        assert_eq!(error.to_string(), "timeout");
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(UpstreamClient::new(&UpstreamConfig::default()).is_ok());
    }
}
