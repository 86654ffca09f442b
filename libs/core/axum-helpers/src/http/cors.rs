use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates a CORS layer restricted to the given origins.
///
/// - Methods used by the storefront APIs (GET, POST, PUT, DELETE, OPTIONS)
/// - Headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Picks the CORS layer for a service.
///
/// Configured origins always win. Without any, development falls back to the
/// permissive layer while production refuses to start.
pub fn cors_layer_for(config: &ServerConfig, environment: &Environment) -> io::Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://shop.example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, using permissive CORS for development");
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(
        "CORS configured with allowed origins: {}",
        config.cors_allowed_origins.join(",")
    );
    Ok(create_cors_layer(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(origins: &[&str]) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins = origins.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_missing_origins_fail_in_production() {
        let err = cors_layer_for(&config_with(&[]), &Environment::Production).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn test_missing_origins_are_permissive_in_development() {
        assert!(cors_layer_for(&config_with(&[]), &Environment::Development).is_ok());
    }

    #[test]
    fn test_configured_origins_accepted() {
        let config = config_with(&["http://localhost:3005", "https://shop.example.com"]);
        assert!(cors_layer_for(&config, &Environment::Production).is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let config = config_with(&["http://bad\norigin"]);
        let err = cors_layer_for(&config, &Environment::Development).unwrap_err();
        assert!(err.to_string().contains("Invalid CORS_ALLOWED_ORIGIN"));
    }
}
