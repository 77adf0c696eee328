//! Blocking HTTP client for the OMDb search endpoint.

use super::{parse_search_response, MovieSearch};
use crate::model::{ApiKey, FetchError, Page, SearchPage};
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Public OMDb endpoint.
pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Failure to construct the HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// reqwest rejected the client configuration (TLS backend, etc.).
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// OMDb search client.
///
/// The key is injected at construction so environments and tests can swap it.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl OmdbClient {
    /// Build a client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    /// [`ClientError::Build`] if the underlying client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reelfind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }
}

impl MovieSearch for OmdbClient {
    fn search(&self, query: &str, page: Page) -> Result<SearchPage, FetchError> {
        let page_param = page.to_string();

        // Status is not checked: OMDb answers rejected keys with a 401 that
        // still carries a regular envelope.
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.expose()),
                ("s", query),
                ("page", page_param.as_str()),
            ])
            .send()
            // without_url: the URL carries the API key
            .map_err(|e| FetchError::Transport(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            FetchError::Transport(format!("failed to read body: {}", e.without_url()))
        })?;

        debug!(%status, bytes = body.len(), %page, "search response received");

        parse_search_response(&body)
    }
}
