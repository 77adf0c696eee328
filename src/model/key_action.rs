//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. Printable characters and
/// cursor keys always edit the search input and never map to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Result list navigation
    /// Select the previous result. Default: ↑/Ctrl+p
    ScrollUp,
    /// Select the next result. Default: ↓/Ctrl+n
    ScrollDown,
    /// Move the selection up by one viewport. Default: Page Up
    PageUp,
    /// Move the selection down by one viewport. Default: Page Down
    PageDown,
    /// Jump to the first result. Default: Ctrl+Home
    ScrollToTop,
    /// Jump to the last loaded result. Default: Ctrl+End
    ScrollToBottom,

    // Result interaction
    /// Expand the selected result, or collapse it if expanded. Default: Enter
    ToggleExpand,

    // Search input
    /// Erase the whole query. Default: Ctrl+u
    ClearQuery,

    // Application
    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}
