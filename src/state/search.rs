//! Search input state.
//!
//! - [`SearchInput`]: what the user has typed, with a cursor
//! - [`SearchQuery`]: a validated, searchable query

// ===== SearchInput =====

/// Text of the search field and the cursor position.
///
/// The cursor counts characters, not bytes, so editing is safe for any
/// UTF-8 input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Input holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters (0..=char_len).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `char_index` (or text end).
    pub(crate) fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    pub(crate) fn from_parts(text: String, cursor: usize) -> Self {
        let max = text.chars().count();
        Self {
            text,
            cursor: cursor.min(max),
        }
    }

    pub(crate) fn into_parts(self) -> (String, usize) {
        (self.text, self.cursor)
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Query text as typed (not trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Tests =====
