use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub product_id: i32,
    #[schema(example = "Great product")]
    pub review: String,
}

#[derive(Debug, Clone, Copy)]
pub struct StaticReview {
    pub id: i32,
    pub product_id: i32,
    pub review: &'static str,
}

impl From<&StaticReview> for Review {
    fn from(r: &StaticReview) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            review: r.review.to_string(),
        }
    }
}

pub static PRODUCT_REVIEWS: [StaticReview; 4] = [
    StaticReview {
        id: 1,
        product_id: 1,
        review: "Great product",
    },
    StaticReview {
        id: 2,
        product_id: 1,
        review: "Pretty good",
    },
    StaticReview {
        id: 3,
        product_id: 1,
        review: "Pretty bad",
    },
    StaticReview {
        id: 4,
        product_id: 2,
        review: "Good product",
    },
];
