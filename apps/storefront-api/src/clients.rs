//! HTTP clients for the product, cart and review services.
//!
//! Each upstream answers with the shared envelope; the clients unwrap `data`
//! and report anything else as an [`UpstreamError`].

use axum_helpers::{ApiResponse, ErrorCode};
use domain_cart::CartQuantity;
use domain_products::Product;
use domain_reviews::Review;
use observability::UpstreamMetrics;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::UpstreamConfig;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream answered {0}")]
    Status(u16),

    #[error("upstream envelope had no data")]
    MissingData,
}

#[derive(Clone, Debug)]
pub struct UpstreamClients {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClients {
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub async fn product(&self, id: i32) -> Result<Product, UpstreamError> {
        let url = format!("{}/products/{}", base(&self.config.product_url), id);
        self.get_data("product", url).await
    }

    pub async fn cart_quantity(&self, id: i32) -> Result<CartQuantity, UpstreamError> {
        let url = format!("{}/cart/{}", base(&self.config.cart_url), id);
        self.get_data("cart", url).await
    }

    pub async fn reviews(&self, id: i32) -> Result<Vec<Review>, UpstreamError> {
        let url = format!("{}/products/{}/reviews", base(&self.config.review_url), id);
        self.get_data("review", url).await
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: String,
    ) -> Result<T, UpstreamError> {
        let start = Instant::now();
        let result = self.fetch(&url).await;
        let outcome = if result.is_ok() { "ok" } else { "error" };
        UpstreamMetrics::record_call(service, outcome, start.elapsed());

        if let Err(e) = &result {
            tracing::warn!(
                error_code = ErrorCode::UpstreamError.code(),
                service = service,
                url = %url,
                "Upstream call failed: {}",
                e
            );
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.data.ok_or(UpstreamError::MissingData)
    }
}

fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}
