// src/models/review.rs
use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A single product review as delivered by the review source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer_name: String,
    pub review_text: String,
    pub summary: String,
    pub overall: f64,                 // Rating on a 1-5 scale
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: Vec<String>,           // Image URLs, often absent
    #[serde(default)]
    pub verified: bool,
    pub review_time: String,          // Display date, e.g. "09 1, 2016"
    pub unix_review_time: i64,        // 0 only for the "no review" placeholder
}

impl Review {
    /// The placeholder shown when a search has no results.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.unix_review_time == 0
    }

    pub fn has_images(&self) -> bool {
        !self.image.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders a rating as five star glyphs, filled up to the rounded score.
pub fn rating_stars(overall: f64) -> String {
    let filled = if overall.is_nan() {
        0
    } else {
        overall.round().clamp(0.0, 5.0) as usize
    };
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Date line for a review. Falls back to the unix timestamp when the
/// source left `reviewTime` blank.
pub fn display_date(review: &Review) -> String {
    if !review.review_time.is_empty() || review.is_placeholder() {
        return review.review_time.clone();
    }
    DateTime::from_timestamp(review.unix_review_time, 0)
        .map(|date| date.format("%m %-d, %Y").to_string())
        .unwrap_or_default()
}
