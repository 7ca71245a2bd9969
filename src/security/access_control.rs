//! Proxy-key verification.
//!
//! The gate admits a POST only when the caller presents the shared secret
//! in `X-Proxy-Key`. The comparison is case-sensitive and constant-time;
//! the secret value itself is never logged.

use axum::http::HeaderMap;

/// Header carrying the shared proxy secret.
pub const X_PROXY_KEY: &str = "x-proxy-key";

/// Check the inbound `X-Proxy-Key` header against the configured secret.
///
/// Returns `false` when the header is absent, not valid UTF-8 visible
/// bytes, or not exactly equal to `expected`.
pub fn verify_proxy_key(headers: &HeaderMap, expected: &str) -> bool {
    match headers.get(X_PROXY_KEY) {
        Some(value) => constant_time_eq(value.as_bytes(), expected.as_bytes()),
        None => false,
    }
}

/// Byte-wise comparison that does not short-circuit on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
