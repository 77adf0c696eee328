//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the error line shown above the list.
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Height of the inline loading row shown below the list.
pub const LOADING_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the first-page loading popup.
pub const LOADING_POPUP_WIDTH: u16 = 20;

/// Height of the first-page loading popup (border + text).
pub const LOADING_POPUP_HEIGHT: u16 = 3;

/// Indent of expanded detail rows under the title.
pub const DETAIL_INDENT: &str = "    ";

/// Longest wait for terminal events when no debounce is pending.
///
/// Bounds how late fetch completions are picked up.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);
