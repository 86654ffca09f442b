//! Reviews Domain
//!
//! Read-only product reviews compiled into the binary.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{ReviewError, ReviewResult};
pub use handlers::ApiDoc;
pub use models::{PRODUCT_REVIEWS, Review, StaticReview};
pub use service::ReviewService;
