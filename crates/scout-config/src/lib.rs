//! # scout-config
//!
//! Layered configuration loading for scout using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCOUT_*` prefix, `__` as separator)
//! 2. Project-level `.scout/config.toml`
//! 3. User-level `~/.config/scout/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCOUT_FETCH__TIMEOUT_SECS` -> `fetch.timeout_secs`,
//! `SCOUT_VAULT__SECRET_DIGEST` -> `vault.secret_digest`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use scout_config::ScoutConfig;
//!
//! let config = ScoutConfig::load().expect("config");
//! println!("history db: {}", config.store.db_path);
//! ```

mod error;
mod fetch;
mod news;
mod store;
mod vault;

pub use error::ConfigError;
pub use fetch::FetchConfig;
pub use news::{MAX_HEADLINES, NewsConfig};
pub use store::StoreConfig;
pub use vault::VaultConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".scout/config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SCOUT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub vault: VaultConfig,
}

impl ScoutConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; the binary loads it before parsing arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make every fetch fail immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero timeouts, a headline
    /// count outside 1 to [`MAX_HEADLINES`], or an empty database path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_secs == 0 {
            return Err(invalid("fetch.timeout_secs", "must be greater than zero"));
        }
        if self.news.timeout_secs == 0 {
            return Err(invalid("news.timeout_secs", "must be greater than zero"));
        }
        if !(1..=MAX_HEADLINES).contains(&self.news.max_headlines) {
            return Err(invalid(
                "news.max_headlines",
                &format!("must be between 1 and {MAX_HEADLINES}"),
            ));
        }
        if self.store.db_path.trim().is_empty() {
            return Err(invalid("store.db_path", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scout").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ScoutConfig::default();
        assert_eq!(config.fetch.timeout_secs, 12);
        assert!(config.news.enabled);
        assert!(!config.vault.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = ScoutConfig::figment();
        let config: ScoutConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.news.max_headlines, 3);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ScoutConfig::default();
        config.fetch.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "fetch.timeout_secs"
        ));
    }

    #[test]
    fn headline_count_is_bounded() {
        for bad in [0, MAX_HEADLINES + 1] {
            let mut config = ScoutConfig::default();
            config.news.max_headlines = bad;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "news.max_headlines"
            ));
        }

        let mut config = ScoutConfig::default();
        config.news.max_headlines = 1;
        assert!(config.validate().is_ok());
    }
}
