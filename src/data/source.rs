//! Loads the static review list the page searches over.

use gloo_net::http::Request;
use leptos::logging::{error, log};
use leptos::*;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::review::Review;

#[derive(Debug, Error)]
pub enum ReviewSourceError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode reviews: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parses a JSON array of reviews.
pub fn parse_reviews(body: &str) -> Result<Vec<Review>, ReviewSourceError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches the review list from `url`.
pub async fn fetch_reviews(url: &str) -> Result<Vec<Review>, ReviewSourceError> {
    let request_error = |source| ReviewSourceError::Request {
        url: url.to_string(),
        source,
    };

    let response = Request::get(url).send().await.map_err(request_error)?;
    if !response.ok() {
        return Err(ReviewSourceError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(request_error)?;
    parse_reviews(&body)
}

/// Loads the reviews once, in the browser only. Until the request
/// finishes, or if it fails, the list is empty.
pub fn use_reviews() -> Signal<Vec<Review>> {
    let url = AppConfig::from_context().reviews_url;
    let reviews = create_local_resource(
        || (),
        move |_| {
            let url = url.clone();
            async move {
                match fetch_reviews(&url).await {
                    Ok(reviews) => {
                        log!("[REVIEWS] Loaded {} reviews from {}", reviews.len(), url);
                        reviews
                    }
                    Err(err) => {
                        error!("[REVIEWS] {}", err);
                        Vec::new()
                    }
                }
            }
        },
    );

    Signal::derive(move || reviews.get().unwrap_or_default())
}
