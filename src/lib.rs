pub mod app;
pub mod config;
pub mod search;

pub mod data {
    pub mod source;
}

pub mod models {
    pub mod review;
}

pub mod components {
    pub mod pagination_controls;
    pub mod review_card;
    pub mod review_summary;
    pub mod search_box;
    pub mod search_metrics;
    pub mod search_page;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
