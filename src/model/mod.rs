//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod api_key;
pub mod error;
pub mod fetch;
pub mod key_action;
pub mod movie;

// Re-export for convenience
pub use api_key::ApiKey;
pub use error::{AppError, FetchError, TRANSPORT_ERROR_MESSAGE, UPSTREAM_FALLBACK_MESSAGE};
pub use fetch::{FetchCompletion, FetchRequest, FetchTag};
pub use key_action::KeyAction;
pub use movie::{ImdbId, InvalidImdbId, MovieSummary, Page, Poster, SearchPage};
