//! View resolution for paginated lists rendered by the infinite scroll container.

use crate::core::infinite_scroll::FetchGate;

/// Status flags reported by the data-fetching collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageStatus {
    /// First page is still loading.
    pub is_loading: bool,
    /// The last request failed.
    pub is_error: bool,
    /// More pages exist upstream.
    pub has_next_page: bool,
    /// A next-page request is in flight.
    pub is_fetching_next_page: bool,
}

/// Main body the container should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    /// Initial load placeholder.
    Loading,
    /// Error placeholder.
    Error,
    /// Loaded but nothing to show.
    Empty,
    /// Items followed by the sentinel.
    Items,
}

/// Content rendered inside the sentinel below the items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFooter {
    /// Next page request is in flight.
    FetchingMore,
    /// Every page has been loaded.
    End,
    /// Waiting for the sentinel to become visible.
    Idle,
}

impl PageStatus {
    /// Pick the body view; loading wins over error, error over emptiness.
    #[must_use]
    pub const fn view(self, item_count: usize) -> ListView {
        if self.is_loading {
            ListView::Loading
        } else if self.is_error {
            ListView::Error
        } else if item_count == 0 {
            ListView::Empty
        } else {
            ListView::Items
        }
    }

    /// Pick the footer shown inside the sentinel.
    #[must_use]
    pub const fn footer(self) -> ListFooter {
        if self.is_fetching_next_page {
            ListFooter::FetchingMore
        } else if !self.has_next_page {
            ListFooter::End
        } else {
            ListFooter::Idle
        }
    }

    /// Gate for the sentinel observer; observation stops while loading, failed or exhausted.
    #[must_use]
    pub const fn gate(self) -> FetchGate {
        FetchGate {
            enabled: !self.is_loading && !self.is_error && self.has_next_page,
            has_next_page: self.has_next_page,
            is_fetching_next_page: self.is_fetching_next_page,
        }
    }
}

/// Flatten pages into one ordered sequence, preserving page then item order.
#[must_use]
pub fn flatten_pages<T: Clone>(pages: &[Vec<T>]) -> Vec<T> {
    pages.iter().flat_map(|page| page.iter().cloned()).collect()
}
