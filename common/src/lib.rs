pub mod config;
pub mod database;
pub mod logger;

pub use config::{AppConfig, ConfigError};
