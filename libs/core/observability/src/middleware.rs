//! Per-request HTTP metrics.
//!
//! Series are keyed by the matched route template, so `/products/1` and
//! `/products/2` share one, and by envelope outcome: the status codes the
//! services answer with map onto `ok`, `validation`, `not_found` and
//! `internal`.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response, StatusCode},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Label for the route when axum did not match one.
const UNMATCHED: &str = "unmatched";

/// Envelope outcome for a response status.
pub fn outcome(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200..=299 => "ok",
        400 => "validation",
        404 => "not_found",
        500..=599 => "internal",
        _ => "other",
    }
}

/// First path segment of a route template: `/products/{id}/reviews` is
/// `products`, `/product/{id}` is `product`.
pub fn resource(route: &str) -> &str {
    route
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("root")
}

/// Records `http_requests_total{method, resource, route, outcome}`,
/// `http_request_duration_seconds{method, route}` and, for anything but `ok`,
/// `http_request_failures_total{resource, outcome}`.
///
/// Install with `route_layer` so [`MatchedPath`] is available:
///
/// ```rust,ignore
/// Router::new()
///     .nest("/products", products_router)
///     .route_layer(middleware::from_fn(metrics_middleware));
/// ```
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().as_str().to_owned();
    let route = matched_path
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());

    let response = next.run(request).await;

    let outcome = outcome(response.status());
    let resource = resource(&route).to_owned();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "resource" => resource.clone(),
        "route" => route.clone(),
        "outcome" => outcome
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());

    if outcome != "ok" {
        counter!(
            "http_request_failures_total",
            "resource" => resource,
            "outcome" => outcome
        )
        .increment(1);
    }

    response
}
