#![cfg(target_arch = "wasm32")]

use std::time::Duration;
use gloo_timers::future::sleep;
use leptos::*;
use reviewbrowser::components::review_card::ReviewCard;
use reviewbrowser::components::review_summary::{provide_summary_renderer, ReviewSummary, SummaryRenderer};
use reviewbrowser::components::search_page::ReviewBrowser;
use reviewbrowser::models::review::Review;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn review(text: &str, verified: bool, images: &[&str], unix_review_time: i64) -> Review {
    Review {
        reviewer_name: "Tester".to_string(),
        review_text: text.to_string(),
        summary: format!("Summary of {text}"),
        overall: 4.0,
        image: images.iter().map(|url| url.to_string()).collect(),
        verified,
        review_time: "09 1, 2016".to_string(),
        unix_review_time,
    }
}

// Helper function to create a fresh container in the document body
fn mount_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

fn query(container: &web_sys::HtmlElement, selector: &str) -> Option<web_sys::Element> {
    container.query_selector(selector).unwrap()
}

fn text_of(container: &web_sys::HtmlElement, selector: &str) -> String {
    query(container, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn button(container: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlButtonElement {
    query(container, selector)
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
}

fn type_keyword(container: &web_sys::HtmlElement, keyword: &str) {
    let input = query(container, "input")
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(keyword);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn test_card_shows_verified_chip_and_gallery() {
    let container = mount_container("card-verified");
    let shown = review("great phone", true, &["a.jpg", "b.jpg"], 1);
    mount_to(container.clone(), move || view! { <ReviewCard review=Signal::derive(move || shown.clone()) /> });
    settle().await;

    assert_eq!(text_of(&container, ".verified-chip"), "Verified Purchase");
    let images = container.query_selector_all("img").unwrap();
    assert_eq!(images.length(), 2);
    let first = images.item(0).unwrap().dyn_into::<web_sys::Element>().unwrap();
    assert_eq!(first.get_attribute("alt").as_deref(), Some("Review Image 1"));
    assert_eq!(text_of(&container, ".review-author"), "Reviewed by: Tester");
    assert_eq!(text_of(&container, ".review-rating"), "★★★★☆");
}

#[wasm_bindgen_test]
async fn test_card_hides_missing_optional_parts() {
    let container = mount_container("card-plain");
    let shown = review("bad battery", false, &[], 2);
    mount_to(container.clone(), move || view! { <ReviewCard review=Signal::derive(move || shown.clone()) /> });
    settle().await;

    assert!(query(&container, ".verified-chip").is_none());
    assert!(query(&container, "img").is_none());
}

#[wasm_bindgen_test]
async fn test_search_and_paging() {
    let container = mount_container("browser-paging");
    let reviews = vec![
        review("great phone", true, &[], 1),
        review("bad battery", false, &[], 2),
        review("great case", true, &[], 3),
    ];
    mount_to(container.clone(), move || {
        let reviews = reviews.clone();
        view! { <ReviewBrowser reviews=Signal::derive(move || reviews.clone()) /> }
    });
    settle().await;

    assert_eq!(text_of(&container, ".metric"), "Total Reviews: 3");
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 1 / 3");
    assert!(button(&container, "button.previous").disabled());

    type_keyword(&container, "GREAT");
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 1 / 2");
    assert_eq!(text_of(&container, ".review-text"), "great phone");

    button(&container, "button.next").click();
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 2 / 2");
    assert_eq!(text_of(&container, ".review-text"), "great case");
    assert!(button(&container, "button.next").disabled());

    button(&container, "button.next").click();
    settle().await;
    assert_eq!(text_of(&container, ".review-text"), "great case");

    button(&container, "button.previous").click();
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 1 / 2");
    assert_eq!(text_of(&container, ".review-text"), "great phone");
    assert!(button(&container, "button.previous").disabled());

    button(&container, "button.next").click();
    settle().await;

    // Editing the keyword goes back to the first match.
    type_keyword(&container, "great ");
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 1 / 2");
}

#[wasm_bindgen_test]
async fn test_no_results_message() {
    let container = mount_container("browser-empty");
    let reviews = vec![review("great phone", true, &[], 1)];
    mount_to(container.clone(), move || {
        let reviews = reviews.clone();
        view! { <ReviewBrowser reviews=Signal::derive(move || reviews.clone()) /> }
    });
    settle().await;

    type_keyword(&container, "tablet");
    settle().await;

    assert_eq!(text_of(&container, ".no-results"), "No reviews found for search term: tablet");
    assert!(query(&container, ".viewing").is_none());
    assert!(query(&container, ".review-card").is_none());
    assert!(button(&container, "button.previous").disabled());
    assert!(button(&container, "button.next").disabled());
}

#[wasm_bindgen_test]
async fn test_summary_slot_receives_review_text() {
    let container = mount_container("summary-slot");
    mount_to(container.clone(), move || {
        provide_summary_renderer(SummaryRenderer::new(|text: String| {
            view! { <p class="summary-output">{ format!("summarized: {text}") }</p> }.into_view()
        }));
        view! { <ReviewSummary text=Signal::derive(|| "great phone".to_string()) /> }
    });
    settle().await;

    assert_eq!(text_of(&container, ".summary-output"), "summarized: great phone");
}

#[wasm_bindgen_test]
async fn test_shrinking_list_pulls_index_back() {
    let container = mount_container("browser-shrink");
    let reviews = create_rw_signal(vec![
        review("one", true, &[], 1),
        review("two", true, &[], 2),
        review("three", true, &[], 3),
        review("four", true, &[], 4),
    ]);
    mount_to(container.clone(), move || view! { <ReviewBrowser reviews=reviews /> });
    settle().await;

    for _ in 0..3 {
        button(&container, "button.next").click();
        settle().await;
    }
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 4 / 4");

    reviews.update(|list| list.truncate(2));
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 2 / 2");
    assert_eq!(text_of(&container, ".review-text"), "two");

    button(&container, "button.previous").click();
    settle().await;
    assert_eq!(text_of(&container, ".viewing"), "Viewing: 1 / 2");
    assert_eq!(text_of(&container, ".review-text"), "one");
}
