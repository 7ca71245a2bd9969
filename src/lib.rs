//! Gatekeeper Proxy
//!
//! A minimal forwarding gate in front of a fixed chat-completion API,
//! built with Tokio and Axum. It exists to keep the upstream endpoint
//! out of reach of unauthenticated callers: inbound POSTs must carry a
//! shared proxy secret, and the caller's own `Authorization` credential
//! is forwarded upstream verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │              GATEKEEPER PROXY              │
//!                      │                                            │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌─────────┐ │
//!   ──────────────────▶│  │  http   │──▶│ security │──▶│upstream │─┼──▶ Chat-completion
//!                      │  │ server  │   │ key gate │   │ client  │ │    API
//!   Client Response    │  └─────────┘   └──────────┘   └────┬────┘ │
//!   ◀──────────────────┼───── response relayed verbatim ◀───┘      │
//!                      │                                            │
//!                      │  ┌──────────────────────────────────────┐ │
//!                      │  │        Cross-Cutting Concerns         │ │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌────────┐ │ │
//!                      │  │  │ config │ │observa-   │ │lifecycle│ │ │
//!                      │  │  │        │ │bility     │ │        │ │ │
//!                      │  │  └────────┘ └───────────┘ └────────┘ │ │
//!                      │  └──────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────┘
//! ```
//!
//! Each request is handled independently; the only shared state is the
//! immutable configuration and the outbound connection pool.

// Core subsystems
pub mod config;
pub mod http;
pub mod security;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
