//! Cart Domain
//!
//! A fixed set of cart line items compiled into the binary. Nothing here
//! mutates at runtime; the service only reads and sums.
//!
//! ```rust
//! use domain_cart::CartService;
//!
//! let service = CartService::default();
//! assert_eq!(service.total_quantity(2).total_quantity, 2);
//! ```

pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::ApiDoc;
pub use models::{CART_ITEMS, CartItem, CartQuantity, StaticCartItem};
pub use service::CartService;
