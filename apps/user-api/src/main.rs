//! User API - static user directory

use axum::{Router, middleware};
use axum_helpers::server::{create_production_app, create_router, health_router, ready_router};
use core_config::AppInfo;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::handlers;
use observability::{metrics_middleware, metrics_router};
use std::time::Duration;
use tracing::info;

mod config;
mod openapi;

use config::Config;

fn routes(app: AppInfo) -> Router {
    Router::new()
        .nest("/users", handlers::router())
        .route_layer(middleware::from_fn(metrics_middleware))
        .merge(health_router(app))
        .merge(ready_router())
        .merge(metrics_router())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    observability::init_metrics();

    let router =
        create_router::<openapi::ApiDoc>(routes(config.app), &config.server, &config.environment)
            .await?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(router, &config.server, Duration::from_secs(10), async {
        info!("User API has no resources to release");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User API shutdown complete");
    Ok(())
}
