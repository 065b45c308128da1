use crate::models::review::Review;

/// Case-insensitive substring match against the review body.
pub fn matches_keyword(review: &Review, keyword: &str) -> bool {
    keyword.is_empty() || review.review_text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Returns the reviews whose text contains `keyword`, in their original order.
/// An empty keyword keeps every review.
pub fn filter_reviews(reviews: &[Review], keyword: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| matches_keyword(review, keyword))
        .cloned()
        .collect()
}
