//! OpenAPI documentation configuration

use axum_helpers::errors::responses::NotFoundResponse;
use domain_products::Product;
use domain_reviews::Review;
use utoipa::OpenApi;

use crate::api::{self, TAG};
use crate::service::ProductDetails;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Aggregates the product, cart and review services"
    ),
    servers(
        (url = "http://localhost:3005", description = "Local development server")
    ),
    paths(api::product_details),
    components(
        schemas(ProductDetails, Product, Review),
        responses(NotFoundResponse)
    ),
    tags(
        (name = TAG, description = "Aggregated product pages")
    )
)]
pub struct ApiDoc;
