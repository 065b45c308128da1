use leptos::*;

/// "Total Reviews" and, when there is something to show, "Viewing i / n".
#[component]
pub fn SearchMetrics(
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] position: Signal<Option<(usize, usize)>>,
) -> impl IntoView {
    view! {
        <div class="search-metrics">
            <h6 class="metric">{ move || format!("Total Reviews: {}", total.get()) }</h6>
            {move || position.get().map(|(current, count)| view! {
                <h6 class="metric viewing">{ format!("Viewing: {} / {}", current, count) }</h6>
            })}
        </div>
    }
}
