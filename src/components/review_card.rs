//! Read-only rendering of a single review.
//! The gallery and the verified chip only appear when the review has them.
use leptos::*;
use crate::models::review::{display_date, rating_stars, Review};

#[component]
pub fn ReviewCard(#[prop(into)] review: Signal<Review>) -> impl IntoView {
    view! {
        <div class="review-card">
            <h2 class="review-summary">{ move || review.with(|r| r.summary.clone()) }</h2>
            <span
                class="review-rating"
                title=move || review.with(|r| format!("{} out of 5", r.overall))
            >
                { move || review.with(|r| rating_stars(r.overall)) }
            </span>
            <p class="review-text">{ move || review.with(|r| r.review_text.clone()) }</p>
            <Show when=move || review.with(Review::has_images)>
                <div class="review-images">
                    {move || review.with(|r| {
                        r.image.iter().enumerate().map(|(index, url)| view! {
                            <img src={url.clone()} height="140" alt={format!("Review Image {}", index + 1)} />
                        }).collect::<Vec<_>>()
                    })}
                </div>
            </Show>
            <p class="review-author">
                { move || review.with(|r| format!("Reviewed by: {}", r.reviewer_name)) }
            </p>
            <p class="review-date">{ move || review.with(|r| format!("Date: {}", display_date(r))) }</p>
            <Show when=move || review.with(|r| r.verified)>
                <span class="verified-chip">{ "Verified Purchase" }</span>
            </Show>
        </div>
    }
}
