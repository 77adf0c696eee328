//! Movie search result types.
//!
//! `MovieSummary` is immutable once received from the upstream API.
//! Identifiers validate non-empty strings at construction time.

use std::fmt;
use std::num::NonZeroU32;

/// Sentinel the upstream API uses for a missing poster.
pub const POSTER_NOT_AVAILABLE: &str = "N/A";

// ===== ImdbId =====

/// External identifier of a title (e.g. "tt0372784").
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImdbId(String);

impl ImdbId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidImdbId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidImdbId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidImdbId {
    /// Empty or whitespace-only id.
    #[error("IMDb id cannot be empty")]
    Empty,
}

// ===== Poster =====

/// Poster reference of a title. Never downloaded, only displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    /// Upstream reported "N/A" or omitted the field.
    NotAvailable,
    /// Poster image URL.
    Url(String),
}

impl Poster {
    /// Interpret the raw upstream value.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(url) if !url.is_empty() && url != POSTER_NOT_AVAILABLE => Self::Url(url),
            _ => Self::NotAvailable,
        }
    }

    /// URL when available.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::NotAvailable => None,
        }
    }
}

// ===== MovieSummary =====

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    imdb_id: ImdbId,
    title: String,
    year: String,
    kind: String,
    poster: Poster,
}

impl MovieSummary {
    /// Create a new summary.
    pub fn new(
        imdb_id: ImdbId,
        title: impl Into<String>,
        year: impl Into<String>,
        kind: impl Into<String>,
        poster: Poster,
    ) -> Self {
        Self {
            imdb_id,
            title: title.into(),
            year: year.into(),
            kind: kind.into(),
            poster,
        }
    }

    /// Unique external identifier.
    pub fn imdb_id(&self) -> &ImdbId {
        &self.imdb_id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release year as reported upstream ("2005", "2004–2019").
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Upstream `Type` ("movie", "series", "episode", "game").
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Poster reference.
    pub fn poster(&self) -> &Poster {
        &self.poster
    }
}

// ===== SearchPage =====

/// One successful page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Results in upstream order.
    pub movies: Vec<MovieSummary>,
    /// Total hits across all pages, when reported.
    pub total_results: Option<u32>,
}

// ===== Page =====

/// 1-based page number of the upstream search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Page(NonZeroU32);

impl Page {
    /// The first page.
    pub const FIRST: Page = Page(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    /// Raw page number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The following page (saturating).
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Whether this is page 1.
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Tests =====
