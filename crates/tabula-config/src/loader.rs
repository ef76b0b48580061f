//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::TabulaConfig;

/// Prefix for environment overrides, e.g. `TABULA_HELPERS__INTERPRETER`.
pub const ENV_PREFIX: &str = "TABULA_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. TOML config file (if given)
/// 3. Environment variables (`TABULA_` prefix, `__` between nested keys)
pub fn load_config(config_path: Option<&str>) -> Result<TabulaConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(TabulaConfig::default()));

    if let Some(path) = config_path {
        // figment silently skips missing files; an explicit path must exist.
        if !std::path::Path::new(path).is_file() {
            return Err(ConfigError::NotFound(path.to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
