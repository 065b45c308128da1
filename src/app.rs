//! Main application entry point for the review browser.
//! Sets up document metadata, shared configuration and the single search route.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::search_page::SearchPage;
use crate::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_context();
    let title = config.page_title.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/reviewbrowser.css" />
        <Title text=title />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}
