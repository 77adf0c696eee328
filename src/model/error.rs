//! Error types for reelfind.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level startup/shutdown error returned from `main`
//!   - `ConfigError` - config file read/parse failures, missing API key
//!   - `LoggingError` - log directory or subscriber setup failures
//!   - `ClientError` - HTTP client construction failures
//!   - `TuiError` - terminal I/O failures
//! - [`FetchError`] - failure of a single search request
//!
//! # Recovery Strategy
//!
//! `FetchError` is **non-fatal**: it is shown as the error line and the
//! already loaded results stay visible. There is no automatic retry; the
//! user recovers by editing the query. Every `AppError` is fatal.

use thiserror::Error;

/// Message shown for any transport-level failure.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";

/// Message shown when the upstream rejects a search without an error text.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to fetch movies";

/// Top-level application error.
///
/// Domain-specific errors convert via `From`, so `main` composes with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// HTTP client could not be built.
    #[error("Client error: {0}")]
    Client(#[from] crate::omdb::ClientError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failure of one search request.
///
/// Both kinds are terminal for the attempt that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered but reported no results or an invalid request.
    ///
    /// Carries the upstream `Error` text verbatim (or the fallback).
    #[error("{0}")]
    Upstream(String),

    /// Network failure, unreadable body, or malformed JSON.
    ///
    /// The detail is for logs; users see [`TRANSPORT_ERROR_MESSAGE`].
    #[error("transport failure: {0}")]
    Transport(String),
}

impl FetchError {
    /// Build an upstream error, falling back when the API gave no text.
    pub fn upstream(message: Option<String>) -> Self {
        match message {
            Some(text) if !text.trim().is_empty() => Self::Upstream(text),
            _ => Self::Upstream(UPSTREAM_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Text to show in the error line.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Upstream(text) => text,
            Self::Transport(_) => TRANSPORT_ERROR_MESSAGE,
        }
    }
}
