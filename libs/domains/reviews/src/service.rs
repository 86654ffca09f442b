use crate::error::{ReviewError, ReviewResult};
use crate::models::{PRODUCT_REVIEWS, Review, StaticReview};

#[derive(Debug, Clone, Copy)]
pub struct ReviewService {
    reviews: &'static [StaticReview],
}

impl ReviewService {
    pub fn new(reviews: &'static [StaticReview]) -> Self {
        Self { reviews }
    }

    pub fn all(&self) -> Vec<Review> {
        self.reviews.iter().map(Review::from).collect()
    }

    /// Reviews of one product, in definition order.
    pub fn for_product(&self, product_id: i32) -> ReviewResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(Review::from)
            .collect();

        if reviews.is_empty() {
            return Err(ReviewError::ProductNotFound(product_id));
        }
        Ok(reviews)
    }
}

impl Default for ReviewService {
    fn default() -> Self {
        Self::new(&PRODUCT_REVIEWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_reviews() {
        let reviews = ReviewService::default().all();
        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[3].review, "Good product");
    }

    #[test]
    fn test_reviews_for_product_keep_order() {
        let texts: Vec<String> = ReviewService::default()
            .for_product(1)
            .unwrap()
            .into_iter()
            .map(|r| r.review)
            .collect();
        assert_eq!(texts, vec!["Great product", "Pretty good", "Pretty bad"]);
    }

    #[test]
    fn test_product_without_reviews() {
        assert_eq!(
            ReviewService::default().for_product(3),
            Err(ReviewError::ProductNotFound(3))
        );
    }
}
