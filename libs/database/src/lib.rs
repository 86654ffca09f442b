//! PostgreSQL connection management for the product service.
//!
//! Wraps SeaORM with env-driven pool configuration, start-up retry with
//! exponential backoff, migration running and a `SELECT 1` health probe.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::RetryConfig;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::from_env()?)).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "product_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
