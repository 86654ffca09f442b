//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cart API",
        version = "0.1.0",
        description = "Read-only cart lines and per-product quantities"
    ),
    servers(
        (url = "http://localhost:3002", description = "Local development server")
    ),
    nest(
        (path = "/cart", api = domain_cart::ApiDoc)
    )
)]
pub struct ApiDoc;
