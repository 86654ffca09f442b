//! Metrics for calls the storefront makes to other services.

use metrics::{counter, histogram};
use std::time::Duration;

pub struct UpstreamMetrics;

impl UpstreamMetrics {
    /// Record one upstream call. `outcome` is "ok" or "error".
    pub fn record_call(service: &'static str, outcome: &'static str, elapsed: Duration) {
        counter!(
            "upstream_requests_total",
            "service" => service,
            "outcome" => outcome
        )
        .increment(1);
        histogram!("upstream_request_duration_seconds", "service" => service)
            .record(elapsed.as_secs_f64());

        tracing::debug!(
            service = service,
            outcome = outcome,
            elapsed_ms = elapsed.as_millis() as u64,
            "Upstream call finished"
        );
    }
}
