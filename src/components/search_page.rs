//! The review browser page: search box, counters, paging controls and the
//! review currently selected in the filtered view.
use leptos::*;
use leptos::logging::log;
use crate::components::{
    pagination_controls::PaginationControls, review_card::ReviewCard,
    review_summary::ReviewSummary, search_box::SearchBox, search_metrics::SearchMetrics,
};
use crate::data::source::use_reviews;
use crate::models::review::Review;
use crate::search::{filter_reviews, SearchState};

#[component]
pub fn SearchPage() -> impl IntoView {
    view! { <ReviewBrowser reviews=use_reviews() /> }
}

/// Search and paging over an already loaded review list.
#[component]
pub fn ReviewBrowser(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    let state = create_rw_signal(SearchState::new());
    let keyword = create_memo(move |_| state.with(|s| s.keyword.clone()));

    // Only recomputed when the list or the keyword changes.
    let filtered = create_memo(move |_| {
        reviews.with(|all| keyword.with(|keyword| filter_reviews(all, keyword)))
    });
    let filtered_len = Signal::derive(move || filtered.with(Vec::len));

    // The list can shrink without a keyword edit, e.g. when the source reloads.
    create_render_effect(move |_| {
        let len = filtered_len.get();
        if state.with_untracked(|s| s.cursor.index() >= len.max(1)) {
            state.update(|s| s.sync_len(len));
        }
    });

    let current = create_memo(move |_| {
        filtered.with(|filtered| state.with(|s| s.cursor.select(filtered)))
    });

    let set_keyword = move |value: String| {
        log!("[SEARCH] Keyword changed to {:?}", value);
        state.update(|s| s.set_keyword(value));
    };
    let previous = move |_: ()| {
        let len = filtered_len.get_untracked();
        state.update(|s| s.previous(len));
    };
    let next = move |_: ()| {
        let len = filtered_len.get_untracked();
        state.update(|s| s.next(len));
    };

    view! {
        <div class="review-browser">
            <div class="search-card">
                <SearchBox keyword=keyword on_input=set_keyword />
                <SearchMetrics
                    total=Signal::derive(move || reviews.with(Vec::len))
                    position=Signal::derive(move || state.with(|s| s.cursor.position(filtered_len.get())))
                />
                <PaginationControls
                    can_previous=Signal::derive(move || state.with(|s| s.cursor.can_previous()))
                    can_next=Signal::derive(move || state.with(|s| s.cursor.can_next(filtered_len.get())))
                    on_previous=previous
                    on_next=next
                />
            </div>
            <Show
                when=move || !current.with(Review::is_placeholder)
                fallback=move || view! {
                    <h6 class="no-results">
                        { move || format!("No reviews found for search term: {}", keyword.get()) }
                    </h6>
                }
            >
                <ReviewSummary text=Signal::derive(move || current.with(|r| r.review_text.clone())) />
                <ReviewCard review=current />
            </Show>
        </div>
    }
}
