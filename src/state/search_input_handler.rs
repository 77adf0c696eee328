//! Search input handling (pure state transitions).
//!
//! All functions are pure - no side effects, testable without TUI. Whether an
//! edit changed the text (and so restarts the search) is decided by the caller
//! comparing before and after.

use crate::state::SearchInput;

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    let offset = state.byte_offset(state.cursor());
    let (mut text, cursor) = state.into_parts();
    text.insert(offset, ch);
    SearchInput::from_parts(text, cursor + 1)
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    if state.cursor() == 0 {
        return state;
    }
    let offset = state.byte_offset(state.cursor() - 1);
    let (mut text, cursor) = state.into_parts();
    text.remove(offset);
    SearchInput::from_parts(text, cursor - 1)
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(state: SearchInput) -> SearchInput {
    if state.cursor() >= state.char_len() {
        return state;
    }
    let offset = state.byte_offset(state.cursor());
    let (mut text, cursor) = state.into_parts();
    text.remove(offset);
    SearchInput::from_parts(text, cursor)
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    let (text, cursor) = state.into_parts();
    SearchInput::from_parts(text, cursor.saturating_sub(1))
}

/// Move cursor right by one position.
/// Saturates at the text length (does not wrap).
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    let (text, cursor) = state.into_parts();
    SearchInput::from_parts(text, cursor + 1)
}

/// Move cursor to the start.
pub fn handle_cursor_home(state: SearchInput) -> SearchInput {
    let (text, _) = state.into_parts();
    SearchInput::from_parts(text, 0)
}

/// Move cursor to the end.
pub fn handle_cursor_end(state: SearchInput) -> SearchInput {
    let (text, _) = state.into_parts();
    SearchInput::with_text(text)
}

/// Erase the whole input.
pub fn clear_input(_state: SearchInput) -> SearchInput {
    SearchInput::default()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
