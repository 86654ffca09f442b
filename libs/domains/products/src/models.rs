use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Generated by storage, never changes
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Product 1")]
    pub name: String,
    #[schema(example = "Product 1 description")]
    pub description: Option<String>,
    #[schema(example = 100.0)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products`.
///
/// Fields are optional at the JSON level so a missing `name` or `price`
/// reaches the service and is reported as "Name and price are required"
/// instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "A very useful widget")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
}

/// Body of `PUT /products/{id}`. Same shape and rules as [`CreateProduct`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// A create request that passed the required-field check.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Present and non-empty.
pub fn truthy_str(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Present, non-zero and not NaN.
pub fn truthy_price(value: Option<f64>) -> Option<f64> {
    value.filter(|p| *p != 0.0 && !p.is_nan())
}

impl CreateProduct {
    /// `None` unless both `name` and `price` are truthy.
    pub fn into_new(self) -> Option<NewProduct> {
        let name = truthy_str(self.name.as_deref())?.to_string();
        let price = truthy_price(self.price)?;
        Some(NewProduct {
            name,
            description: self.description,
            price,
        })
    }
}

impl UpdateProduct {
    pub fn has_required(&self) -> bool {
        truthy_str(self.name.as_deref()).is_some() && truthy_price(self.price).is_some()
    }
}

impl Product {
    /// Overwrite fields from an update. A falsy value keeps the current one,
    /// so an update can never clear a field.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = truthy_str(update.name.as_deref()) {
            self.name = name.to_string();
        }
        if let Some(description) = truthy_str(update.description.as_deref()) {
            self.description = Some(description.to_string());
        }
        if let Some(price) = truthy_price(update.price) {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}
