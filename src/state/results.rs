//! Accumulated search results of the current query.

use crate::model::{MovieSummary, SearchPage};

/// Append-only list of results across pages.
///
/// Arrival order is preserved. Overlapping pages are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList {
    movies: Vec<MovieSummary>,
    total_results: Option<u32>,
}

impl ResultList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page. Returns how many items were added.
    pub fn append(&mut self, page: SearchPage) -> usize {
        let added = page.movies.len();
        self.movies.extend(page.movies);
        if page.total_results.is_some() {
            self.total_results = page.total_results;
        }
        added
    }

    /// Drop everything (query changed).
    pub fn clear(&mut self) {
        self.movies.clear();
        self.total_results = None;
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&MovieSummary> {
        self.movies.get(index)
    }

    /// Loaded items in order.
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    /// Upstream total hit count, from the latest page that reported it.
    pub fn total_results(&self) -> Option<u32> {
        self.total_results
    }
}
