//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gatekeeper_requests_total` (counter): requests by method and status
//! - `gatekeeper_request_duration_seconds` (histogram): end-to-end latency
//!
//! # Design Decisions
//! - Prometheus exposition on a separate listener, disabled by default
//! - Labels carry method and status only; never paths or header values

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "gatekeeper_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!("gatekeeper_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
