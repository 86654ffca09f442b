//! API routes module

pub mod health;
pub mod products;

use axum::{Router, middleware};
use observability::{metrics_middleware, metrics_router};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .route_layer(middleware::from_fn(metrics_middleware))
        .merge(health::router(state))
        .merge(metrics_router())
}
