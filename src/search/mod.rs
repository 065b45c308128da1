//! Keyword filtering and one-at-a-time paging over the review list.

pub mod cursor;
pub mod filter;

pub use cursor::PageCursor;
pub use filter::{filter_reviews, matches_keyword};

/// Transient search UI state: the keyword and where we are in its results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub keyword: String,
    pub cursor: PageCursor,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every keyword edit starts the results over from the first review.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.cursor.reset();
    }

    /// Keeps the cursor inside the filtered view after the list changes.
    pub fn sync_len(&mut self, filtered_len: usize) {
        self.cursor.clamp(filtered_len);
    }

    pub fn previous(&mut self, filtered_len: usize) {
        self.sync_len(filtered_len);
        self.cursor.previous();
    }

    pub fn next(&mut self, filtered_len: usize) {
        self.sync_len(filtered_len);
        self.cursor.next(filtered_len);
    }
}
