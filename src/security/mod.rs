//! Access control subsystem.
//!
//! # Responsibilities
//! - Verify the shared proxy secret on the data path
//!
//! # Design Decisions
//! - The secret is a coarse allow-list gate, independent of the upstream
//!   credential the caller supplies in `Authorization`
//! - Neither credential is ever logged or stored

pub mod access_control;

pub use access_control::{verify_proxy_key, X_PROXY_KEY};
