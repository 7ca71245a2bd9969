//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     loader.rs (read TOML, apply env overrides)
//!         → validation.rs (semantic checks, all errors reported)
//!         → schema.rs types handed to the rest of the system
//! ```
//!
//! # Design Decisions
//! - Serde handles syntax; validation.rs handles semantics
//! - The proxy secret may come from the file or `PROXY_SECRET` (env wins)
//! - Configuration is immutable once accepted; no runtime reload

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_default_config, ConfigError, PROXY_SECRET_ENV};
pub use schema::{
    AuthConfig, GatewayConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
