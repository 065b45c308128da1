//! Previous / Next buttons for stepping through the filtered reviews.
//! Each button is disabled when its move would leave the valid range.
use leptos::*;

#[component]
pub fn PaginationControls(
    #[prop(into)] can_previous: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="previous"
                disabled=move || !can_previous.get()
                on:click=move |_| on_previous.call(())
            >
                { "Previous" }
            </button>
            <button
                class="next"
                disabled=move || !can_next.get()
                on:click=move |_| on_next.call(())
            >
                { "Next" }
            </button>
        </div>
    }
}
