//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton holding
//! the values the management tools read from the environment (and `.env`).
//! Command-line overrides and tests mutate it through the per-field setters.

use std::env;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};
use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "data/dev.db";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but blank")]
    Missing(&'static str),
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: Option<String>,
    /// A SQLite file path or a full `sqlite:` connection URL.
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".into(),
            project_name: "org-logger-roles".into(),
            log_level: "info".into(),
            log_file: None,
            database_path: DEFAULT_DATABASE_PATH.into(),
        }
    }
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let database_path = env::var("DATABASE_PATH").unwrap_or(defaults.database_path);
        if database_path.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_PATH"));
        }

        Ok(Self {
            env: env::var("APP_ENV").unwrap_or(defaults.env),
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").ok().filter(|f| !f.trim().is_empty()),
            database_path,
        })
    }

    /// Loads the environment into the singleton, replacing any earlier value.
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::from_env()?;
        Self::set_field(|cfg| *cfg = config);
        Ok(())
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// Falls back to the defaults when the environment is unusable; call
    /// [`AppConfig::init`] first to surface that error instead.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::instance()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Reloads the configuration from the environment, dropping overrides.
    pub fn reset() {
        let config = Self::from_env().unwrap_or_default();
        Self::set_field(|cfg| *cfg = config);
    }

    fn instance() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(Self::from_env().unwrap_or_default()))
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        setter(&mut guard);
    }

    pub fn set_database_path(value: impl Into<String>) {
        Self::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        Self::set_field(|cfg| cfg.log_level = value.into());
    }
}
