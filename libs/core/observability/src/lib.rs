//! Observability utilities for the storefront services.
//!
//! - Prometheus recorder and `/metrics` exposition
//! - HTTP request metrics middleware
//! - Product and upstream-call metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_router, ProductMetrics};
//!
//! init_metrics();
//! ProductMetrics::record_created();
//!
//! let app = Router::new().merge(metrics_router());
//! ```

pub mod middleware;
pub mod products;
pub mod upstream;

pub use middleware::metrics_middleware;
pub use products::ProductMetrics;
pub use upstream::UpstreamMetrics;

pub use metrics::{counter, gauge, histogram};

use axum::{Router, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at startup; later calls return the same handle. If another
/// recorder is already installed globally, a detached recorder is used so
/// `/metrics` still renders.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder initialized");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed globally: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        };

        register_metric_descriptions();

        handle
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Router exposing `GET /metrics`.
pub fn metrics_router() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_gauge;
    use metrics::describe_histogram;

    // HTTP metrics
    describe_counter!("http_requests_total", "HTTP requests by route and outcome");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_request_failures_total",
        "Failure envelopes by resource and outcome"
    );

    // Product metrics
    describe_counter!(
        "product_operations_total",
        "Product repository operations by type"
    );
    describe_gauge!(
        "products_listed_last",
        "Number of products returned by the last list call"
    );

    // Upstream metrics (storefront aggregator)
    describe_counter!(
        "upstream_requests_total",
        "Calls to dependent services by service and outcome"
    );
    describe_histogram!(
        "upstream_request_duration_seconds",
        "Latency of calls to dependent services"
    );
}
