//! Review API - static product reviews

use axum::{Router, middleware};
use axum_helpers::server::{create_production_app, create_router, health_router, ready_router};
use core_config::AppInfo;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_reviews::{ApiDoc, ReviewService, handlers};
use observability::{metrics_middleware, metrics_router};
use std::time::Duration;
use tracing::info;

mod config;

use config::Config;

fn routes(app: AppInfo) -> Router {
    handlers::router(ReviewService::default())
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

    // Review paths span /reviews and /products, so the domain doc is served as is
    let router =
        create_router::<ApiDoc>(routes(config.app), &config.server, &config.environment).await?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(router, &config.server, Duration::from_secs(10), async {
        info!("Review API has no resources to release");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Review API shutdown complete");
    Ok(())
}
