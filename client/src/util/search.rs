//! Product search over the static catalog grid.
//!
//! Matching is a case-insensitive substring test on the product title. Typing
//! is debounced: each keystroke takes a ticket and only the latest ticket may
//! apply its query when its timer fires. Enter applies immediately.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Delay between the last keystroke and the grid filtering.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Canonical form of a query or title for matching.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `title` matches an already normalized `query`. Empty matches all.
pub fn matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(query)
}

/// Keep the items whose title matches `query`, in grid order.
pub fn filter_by_title<'a, T>(items: &'a [T], query: &str, title: impl Fn(&T) -> &str) -> Vec<&'a T> {
    let query = normalize_query(query);
    items.iter().filter(|item| matches(title(item), &query)).collect()
}

/// Search box state for one catalog page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// What the user typed.
    pub text: String,
    /// Normalized query currently filtering the grid.
    pub applied: String,
    seq: u64,
}

impl SearchInput {
    /// Record a keystroke. Returns the ticket to settle after the debounce,
    /// or `None` when the box was emptied (the grid resets immediately).
    pub fn on_input(&mut self, text: &str) -> Option<u64> {
        self.text = text.to_owned();
        self.seq += 1;
        if text.trim().is_empty() {
            self.applied.clear();
            return None;
        }
        Some(self.seq)
    }

    /// Apply the pending query if `ticket` is still the latest keystroke.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.applied = normalize_query(&self.text);
        true
    }

    /// Enter pressed: apply now and invalidate pending tickets.
    pub fn submit(&mut self) {
        self.seq += 1;
        self.applied = normalize_query(&self.text);
    }

    pub fn summary(&self, results: usize) -> SearchSummary {
        if self.applied.is_empty() {
            SearchSummary::All
        } else if results == 0 {
            SearchSummary::NothingFound { query: self.applied.clone() }
        } else {
            SearchSummary::Found { count: results, query: self.applied.clone() }
        }
    }
}

/// Message shown above the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchSummary {
    All,
    Found { count: usize, query: String },
    NothingFound { query: String },
}

impl SearchSummary {
    /// Heading and detail lines; `None` when no message is shown.
    pub fn message(&self) -> Option<(String, String)> {
        match self {
            Self::All => None,
            Self::Found { count, query } => Some((
                format!("Найдено товаров: {count}"),
                format!("Результаты по запросу: \"{query}\""),
            )),
            Self::NothingFound { query } => Some((
                "Ничего не найдено".to_owned(),
                format!("По запросу \"{query}\" товаров не найдено."),
            )),
        }
    }
}
