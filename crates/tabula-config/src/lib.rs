//! # tabula-config
//!
//! Configuration management for tabula.
//! Supports layered config: defaults -> TOML file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, ENV_PREFIX};
pub use schema::{HelperConfig, LoggingConfig, RoutingConfig, TabulaConfig, UnknownToolPolicy};
