//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides (`ROSTER_SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "ROSTER";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_VAR: &str = "ROSTER_CONFIG_DIR";

/// Environment variable that selects the environment-specific file.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Local, uncommitted overrides
    /// 4. Environment variables with `ROSTER_` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from `$ROSTER_CONFIG_DIR`, falling back to `./config`.
    pub fn from_default_location() -> Result<Self, RosterError> {
        let dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "./config".to_string());
        Self::new(dir)
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns the directory configuration files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one is invalid.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, RosterError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!(
            "Loading configuration from {} for environment: {}",
            config_dir.display(),
            environment
        );

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config file: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_roster_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| RosterError::Configuration(format_validation_errors(&errors)))?;

        if app_config.app.environment == "production" && app_config.observability.log_level == "trace" {
            warn!("Trace logging is enabled in production; request payloads may be logged");
        }

        Ok(app_config)
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}
