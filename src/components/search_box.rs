use leptos::*;

#[component]
pub fn SearchBox(
    #[prop(into)] keyword: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="search-box">
            <span>{ "Search Reviews" }</span>
            <input
                type="search"
                placeholder="Search Reviews"
                prop:value=move || keyword.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </label>
    }
}
