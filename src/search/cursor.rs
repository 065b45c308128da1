use crate::models::review::Review;

/// Position of the review currently on display within the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// False on the last review, and always false for an empty view.
    pub fn can_next(&self, len: usize) -> bool {
        len > 0 && self.index + 1 < len
    }

    pub fn previous(&mut self) {
        if self.can_previous() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self, len: usize) {
        if self.can_next(len) {
            self.index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Pulls the index back inside `[0, len)`; an empty view pins it at 0.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// The review to show. An empty view yields the placeholder review.
    pub fn select(&self, filtered: &[Review]) -> Review {
        let last = filtered.len().saturating_sub(1);
        filtered
            .get(self.index.min(last))
            .cloned()
            .unwrap_or_else(Review::empty)
    }

    /// 1-based position and total, for the "Viewing" label.
    pub fn position(&self, len: usize) -> Option<(usize, usize)> {
        (len > 0).then(|| (self.index.min(len - 1) + 1, len))
    }
}
