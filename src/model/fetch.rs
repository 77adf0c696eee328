//! Fetch request/completion envelopes exchanged between the state machine
//! and the background dispatcher.

use super::{FetchError, Page, SearchPage};

/// Identity of an issued request.
///
/// `generation` changes on every query edit; a completion whose tag differs
/// from the request currently awaited is stale and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTag {
    /// Query generation the request was issued for.
    pub generation: u64,
    /// Page the request was issued for.
    pub page: Page,
}

/// A search to run off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Identity used to match the completion.
    pub tag: FetchTag,
    /// Effective (debounced, non-empty) query.
    pub query: String,
}

impl FetchRequest {
    /// Page to request.
    pub fn page(&self) -> Page {
        self.tag.page
    }
}

/// Outcome of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Tag copied from the request.
    pub tag: FetchTag,
    /// Page of results or the failure.
    pub result: Result<SearchPage, FetchError>,
}
