/// Where the review list lives when `REVIEWS_URL` is not set at build time.
pub const DEFAULT_REVIEWS_URL: &str = "/assets/reviews.json";
pub const DEFAULT_PAGE_TITLE: &str = "Search Reviews";

/// Application settings shared with components through Leptos context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub reviews_url: String,
    pub page_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Read at compile time so the wasm bundle and the server agree.
        Self::with_reviews_url(option_env!("REVIEWS_URL"))
    }
}

impl AppConfig {
    fn with_reviews_url(url: Option<&str>) -> Self {
        let reviews_url = url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_REVIEWS_URL);
        Self {
            reviews_url: reviews_url.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    /// The config in the current reactive context, or the defaults.
    pub fn from_context() -> Self {
        leptos::use_context::<AppConfig>().unwrap_or_default()
    }
}
