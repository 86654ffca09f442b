//! Product CRUD metrics.

use metrics::{counter, gauge};

/// Product metrics recorder
pub struct ProductMetrics;

impl ProductMetrics {
    pub fn record_listed(count: usize) {
        counter!("product_operations_total", "operation" => "list").increment(1);
        gauge!("products_listed_last").set(count as f64);
    }

    pub fn record_fetched() {
        counter!("product_operations_total", "operation" => "get").increment(1);
    }

    pub fn record_created() {
        counter!("product_operations_total", "operation" => "create").increment(1);
    }

    pub fn record_updated() {
        counter!("product_operations_total", "operation" => "update").increment(1);
    }

    pub fn record_deleted() {
        counter!("product_operations_total", "operation" => "delete").increment(1);
    }

    /// Validation rejections, by operation.
    pub fn record_rejected(operation: &'static str) {
        counter!(
            "product_operations_total",
            "operation" => operation,
            "outcome" => "rejected"
        )
        .increment(1);
    }
}
