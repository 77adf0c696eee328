//! OMDb search API boundary.
//!
//! [`MovieSearch`] is the seam between the state machine and the network:
//! the production implementation is [`OmdbClient`], tests script their own.

mod client;
mod envelope;

pub use client::{ClientError, OmdbClient, DEFAULT_API_URL};
pub use envelope::parse_search_response;

use crate::model::{FetchError, Page, SearchPage};

/// Runs one page of a title search.
///
/// Implementations block; callers run them off the UI thread.
pub trait MovieSearch: Send + Sync {
    /// Search `query` and return page `page`.
    ///
    /// # Errors
    /// [`FetchError::Upstream`] when the API rejects the search,
    /// [`FetchError::Transport`] when it cannot be reached or understood.
    fn search(&self, query: &str, page: Page) -> Result<SearchPage, FetchError>;
}
