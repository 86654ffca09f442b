use axum_helpers::errors::validation_message;
use observability::ProductMetrics;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Inputs are validated here even though `ValidatedJson` already checked HTTP
/// bodies, so callers that bypass the router get the same rules.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        let products = self.repository.list().await?;
        ProductMetrics::record_listed(products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        ProductMetrics::record_fetched();
        Ok(product)
    }

    /// Create a product. `name` and `price` must both be truthy.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        let Some(new_product) = input.into_new() else {
            ProductMetrics::record_rejected("create");
            return Err(ProductError::missing_required());
        };

        let product = self.repository.create(new_product).await?;
        ProductMetrics::record_created();
        Ok(product)
    }

    /// Update a product. The required-field check runs before the lookup,
    /// so an invalid body for an unknown id is still a validation error.
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        if !input.has_required() {
            ProductMetrics::record_rejected("update");
            return Err(ProductError::missing_required());
        }

        let product = self.repository.update(id, input).await?;
        ProductMetrics::record_updated();
        Ok(product)
    }

    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        ProductMetrics::record_deleted();
        Ok(())
    }
}
