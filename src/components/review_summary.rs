//! Slot for the externally provided summarization view.
//!
//! The summarizer is not part of this crate. An embedder places a
//! [`SummaryRenderer`] in Leptos context; it receives the text of the review
//! on display and returns whatever view it wants to show. Without one, the
//! slot renders nothing.

use leptos::*;

#[derive(Clone, Copy)]
pub struct SummaryRenderer(pub Callback<String, View>);

impl SummaryRenderer {
    pub fn new(render: impl Fn(String) -> View + 'static) -> Self {
        Self(Callback::new(render))
    }
}

/// Installs `renderer` for every `ReviewSummary` below the current owner.
pub fn provide_summary_renderer(renderer: SummaryRenderer) {
    provide_context(renderer);
}

#[component]
pub fn ReviewSummary(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let renderer = use_context::<SummaryRenderer>();

    view! {
        <div class="review-summary-slot">
            {move || renderer.map(|SummaryRenderer(render)| render.call(text.get()))}
        </div>
    }
}
