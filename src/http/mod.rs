//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, gate handler)
//!     → request.rs (add request ID)
//!     → [security verifies proxy key]
//!     → [upstream forwards admitted requests]
//!     → response.rs (preflight / relay / JSON errors, CORS headers)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::GateError;
pub use server::HttpServer;
