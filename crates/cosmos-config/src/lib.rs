//! # cosmos-config
//!
//! Layered configuration loading for Cosmos Class using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COSMOS_*` prefix, `__` as separator)
//! 2. Project-level `.cosmos/config.toml`
//! 3. User-level `~/.config/cosmos/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COSMOS_API__BASE_URL` -> `api.base_url`,
//! `COSMOS_SESSION__COHORT_ID` -> `session.cohort_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cosmos_config::PortalConfig;
//!
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod identity;
mod session;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use identity::IdentityConfig;
pub use session::{ProfileConfig, SessionConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the resulting
    /// API settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests and the CLI can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cosmos/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("COSMOS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cosmos").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert_eq!(config.api.base_url(), DEFAULT_BASE_URL);
        assert!(config.identity.email_override().is_none());
        assert_eq!(config.session.user_id, 1);
        assert_eq!(config.session.cohort_id, 1);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.profile.display_name, "Alex Vercel");
            assert!(config.api.timeout_secs.is_none());
            Ok(())
        });
    }
}
