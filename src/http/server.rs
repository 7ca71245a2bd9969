//! HTTP server setup and the gate handler.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all gate handler
//! - Wire up middleware (tracing, body limit, request ID, response contract)
//! - Bind server to listener, serve with graceful shutdown
//! - Enforce the access policy and forward admitted requests upstream
//!
//! # Access policy (evaluated in order)
//! 1. OPTIONS → permissive CORS preflight, no auth
//! 2. non-POST → 405
//! 3. wrong or missing X-Proxy-Key → 401
//! 4. missing Authorization → 400
//! 5. forward; upstream status relayed verbatim, transport failure → 502

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response::{self, GateError};
use crate::observability::metrics;
use crate::security::access_control::verify_proxy_key;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstream: UpstreamClient,
}

/// HTTP server for the gatekeeper proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let state = AppState {
            config: Arc::new(config),
            upstream,
        };
        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let limits = state.config.limits.clone();
        Router::new()
            .route("/{*path}", any(gate_handler))
            .route("/", any(gate_handler))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(limits.max_body_bytes))
            .layer(map_response(enforce_response_contract))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns when the shutdown signal fires and in-flight requests have
    /// drained, or on a listener-level IO error.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Rewrite middleware-generated rejections into the response contract.
///
/// Every response the gate itself produces carries
/// `Access-Control-Allow-Origin: *` and a JSON body. A response without
/// the CORS header was short-circuited by a layer (e.g. the body-size
/// limit) and is rebuilt as `{"error":"<reason>"}` with the same status.
async fn enforce_response_contract(response: Response) -> Response {
    if response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    {
        return response;
    }
    let status = response.status();
    let message = match status {
        StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
        _ => status.canonical_reason().unwrap_or("Request rejected"),
    };
    response::json_error(status, message)
}

/// Catch-all handler: every path goes through the same gate.
async fn gate_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = gate(&state, request, &request_id).await;

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

async fn gate(state: &AppState, request: Request<Body>, request_id: &str) -> Response {
    // 1. CORS preflight is a capability negotiation step, not a data
    //    operation; it bypasses authentication entirely.
    if request.method() == Method::OPTIONS {
        return response::preflight();
    }

    // 2. The forwarding path is POST-only.
    if request.method() != Method::POST {
        tracing::debug!(request_id = %request_id, method = %request.method(), "Rejecting non-POST");
        return GateError::MethodNotAllowed.into_response();
    }

    // 3. Coarse allow-list gate: the shared proxy secret.
    if !verify_proxy_key(request.headers(), &state.config.auth.proxy_key) {
        tracing::warn!(request_id = %request_id, "Proxy key missing or invalid");
        return GateError::Unauthorized.into_response();
    }

    // 4. The upstream credential must be present; it is opaque to the gate.
    let authorization = match request.headers().get(header::AUTHORIZATION) {
        Some(value) => value.clone(),
        None => {
            tracing::debug!(request_id = %request_id, "Missing Authorization header");
            return GateError::MissingAuthorization.into_response();
        }
    };

    // 5. Buffer the inbound body unchanged (the limit layer has already
    //    bounded its size) and make the single outbound call.
    let body = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(request_id = %request_id, error = %e, "Failed to read request body");
            return response::json_error(
                axum::http::StatusCode::BAD_REQUEST,
                "Failed to read request body",
            );
        }
    };

    match state.upstream.forward(authorization, body).await {
        // 6. Any upstream reply, 4xx/5xx included, is relayed verbatim.
        Ok(reply) => {
            tracing::debug!(request_id = %request_id, status = %reply.status, "Upstream replied");
            response::relay(reply.status, reply.body)
        }
        // 7. Only transport-level failures become proxy errors.
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream unreachable");
            GateError::Upstream(e.to_string()).into_response()
        }
    }
}
