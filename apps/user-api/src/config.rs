//! Configuration for the User API

use core_config::{AppInfo, ConfigError, app_info, server::ServerConfig};

pub use core_config::Environment;

const DEFAULT_PORT: u16 = 3001;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env_with_port(DEFAULT_PORT)?,
            environment: Environment::from_env(),
        })
    }
}
