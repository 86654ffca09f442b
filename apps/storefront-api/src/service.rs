//! Merges product, cart and review data for one product.

use domain_products::Product;
use domain_reviews::Review;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::clients::UpstreamClients;

/// Combined view of one product. Each part degrades on its own when its
/// service fails: no product, zero sold, no reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetails {
    pub product: Option<Product>,
    /// Total quantity of the product across carts
    #[schema(example = 2)]
    pub cart: u32,
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug)]
pub struct StorefrontService {
    clients: UpstreamClients,
}

impl StorefrontService {
    pub fn new(clients: UpstreamClients) -> Self {
        Self { clients }
    }

    /// Queries the three services concurrently.
    pub async fn product_details(&self, id: i32) -> ProductDetails {
        let (product, cart, reviews) = tokio::join!(
            self.clients.product(id),
            self.clients.cart_quantity(id),
            self.clients.reviews(id),
        );

        ProductDetails {
            product: product.ok(),
            cart: cart.map(|q| q.total_quantity).unwrap_or(0),
            reviews: reviews.unwrap_or_default(),
        }
    }
}
