//! Configuration for the Product API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};
use database::RetryConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env_with_port(DEFAULT_PORT)?,
            environment: Environment::from_env(),
            database: PostgresConfig::from_env()?,
            retry: RetryConfig::from_env()?,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}
