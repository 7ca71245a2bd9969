//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! gate handler
//!     → client.rs (single POST, Content-Type + forwarded Authorization)
//!     → upstream replies (any status) → UpstreamReply
//!     → transport failure → UpstreamError → 502 path in the handler
//! ```
//!
//! # Design Decisions
//! - One outbound call per inbound request; no retries, no queuing
//! - The upstream body is read fully before the caller gets a response
//! - The Authorization value is opaque: forwarded, never inspected

pub mod client;

pub use client::{UpstreamClient, UpstreamError, UpstreamReply};
