//! Response construction.
//!
//! # Responsibilities
//! - Build the CORS preflight response
//! - Build JSON error responses for each gate rejection
//! - Relay upstream responses verbatim (status + body)
//!
//! # Design Decisions
//! - Every response, including errors, carries `Access-Control-Allow-Origin: *`
//! - Error bodies are always `{"error":"<message>"}`
//! - Upstream 4xx/5xx are relayed as-is, never rewritten

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};

const ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");
const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("POST, OPTIONS");
const ALLOW_HEADERS: HeaderValue =
    HeaderValue::from_static("Content-Type, Authorization, X-Proxy-Key");
const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Terminal gate rejections, one per branch of the access policy.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing Authorization header")]
    MissingAuthorization,

    #[error("Proxy error: {0}")]
    Upstream(String),
}

impl GateError {
    /// HTTP status for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            GateError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GateError::Unauthorized => StatusCode::UNAUTHORIZED,
            GateError::MissingAuthorization => StatusCode::BAD_REQUEST,
            GateError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> axum::response::Response {
        json_error(self.status(), &self.to_string())
    }
}

/// Build a `{"error":"<message>"}` response with the given status.
pub fn json_error(status: StatusCode, message: &str) -> axum::response::Response {
    let body = serde_json::json!({ "error": message }).to_string();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, APPLICATION_JSON);
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN);
    response
}

/// Build the CORS preflight response: empty body, permissive allow headers.
pub fn preflight() -> axum::response::Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN);
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS);
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS);
    response
}

/// Relay an upstream reply to the caller with the upstream's own status.
pub fn relay(status: StatusCode, body: Bytes) -> axum::response::Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, APPLICATION_JSON);
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN);
    response
}
