//! Observability subsystem.
//!
//! # Responsibilities
//! - Structured logging via tracing (logging.rs)
//! - Prometheus metrics exposition (metrics.rs)

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
