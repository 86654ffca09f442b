//! Configuration for the Storefront API

use core_config::{
    AppInfo, ConfigError, app_info, env_or_default, env_parse, server::ServerConfig,
};

pub use core_config::Environment;

const DEFAULT_PORT: u16 = 3005;

/// Where the storefront finds the services it aggregates
#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamConfig {
    pub product_url: String,
    pub cart_url: String,
    pub review_url: String,
    /// Per-request timeout for every upstream call
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// `PRODUCT_SERVICE_URL`, `CART_SERVICE_URL`, `REVIEW_SERVICE_URL` and
    /// `UPSTREAM_TIMEOUT_SECS`, defaulting to the local development ports.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            product_url: env_or_default("PRODUCT_SERVICE_URL", "http://localhost:3000"),
            cart_url: env_or_default("CART_SERVICE_URL", "http://localhost:3002"),
            review_url: env_or_default("REVIEW_SERVICE_URL", "http://localhost:3003"),
            timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS", "5")?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub upstream: UpstreamConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env_with_port(DEFAULT_PORT)?,
            environment: Environment::from_env(),
            upstream: UpstreamConfig::from_env()?,
        })
    }
}
